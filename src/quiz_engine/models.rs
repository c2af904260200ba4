use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Option identifiers
// ---------------------------------------------------------------------------

/// Letter label of one answer option. A question carries A, B, C and
/// optionally D, always in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionId {
    A,
    B,
    C,
    D,
}

impl OptionId {
    /// Parse a single letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<OptionId> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionId::A),
            'B' => Some(OptionId::B),
            'C' => Some(OptionId::C),
            'D' => Some(OptionId::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionId::A => 'A',
            OptionId::B => 'B',
            OptionId::C => 'C',
            OptionId::D => 'D',
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One labelled answer choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
}

/// A rejected `Question` construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("expected 3 or 4 options, got {0}")]
    WrongOptionCount(usize),
    #[error("options must be labelled A, B, C then optional D, in order")]
    MisorderedOptions,
    #[error("correct answer {0} is not one of the question's options")]
    CorrectAnswerMissing(OptionId),
}

/// One quiz item: prompt text, 3–4 labelled options, the id of the correct
/// option, and an explanation shown after submission.
///
/// Immutable once constructed; [`Question::new`] enforces that the option
/// labels are exactly A, B, C (and optionally D) in order and that
/// `correct_answer` names one of them.  Fields stay private so no invalid
/// question can exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<AnswerOption>,
    correct_answer: OptionId,
    explanation: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        correct_answer: OptionId,
        explanation: impl Into<String>,
    ) -> Result<Question, QuestionError> {
        if options.len() < 3 || options.len() > 4 {
            return Err(QuestionError::WrongOptionCount(options.len()));
        }
        let expected = [OptionId::A, OptionId::B, OptionId::C, OptionId::D];
        if options.iter().map(|o| o.id).ne(expected[..options.len()].iter().copied()) {
            return Err(QuestionError::MisorderedOptions);
        }
        if !options.iter().any(|o| o.id == correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing(correct_answer));
        }
        Ok(Question {
            text: text.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in label order: A, B, C, then D when present.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn correct_answer(&self) -> OptionId {
        self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether `id` picks the correct option.
    pub fn is_correct(&self, id: OptionId) -> bool {
        id == self.correct_answer
    }
}

// ---------------------------------------------------------------------------
// Session phase
// ---------------------------------------------------------------------------

/// Where one quiz attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current question has no submitted answer yet; a selection may be
    /// pending but is not committed.
    Selecting,
    /// The current question has a recorded answer; correctness and the
    /// explanation are visible.
    Explaining,
    /// The attempt reached the end of the question list.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Selecting => write!(f, "selecting"),
            Phase::Explaining => write!(f, "explaining"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}
