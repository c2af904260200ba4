//! Quiz session state machine.
//!
//! One [`QuizSession`] is one attempt at a shuffled question list.  The
//! presentation layer drives it with discrete calls (select, submit, next,
//! previous, jump, reset) and reads the observable state back after each
//! one.  Everything is synchronous; no operation blocks or interleaves.
//!
//! Navigation is asymmetric: `go_next` demands an answer for the current
//! question, while `jump_to` accepts any in-range index, answered or not.
//! Every rejected operation returns an error and leaves the session exactly
//! as it was.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::quiz_engine::models::{OptionId, Phase, Question};
use crate::quiz_engine::shuffle::shuffled;

/// A session operation whose precondition was not met.  The session state
/// is guaranteed unchanged whenever one of these comes back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a session with no questions")]
    EmptyBank,
    #[error("the current question already has a recorded answer")]
    AlreadyAnswered,
    #[error("no option selected to submit")]
    NoSelection,
    #[error("answer the current question before advancing")]
    CurrentUnanswered,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("the quiz is complete")]
    QuizComplete,
    #[error("question index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// All mutable state of one quiz attempt.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    user_answers: Vec<Option<OptionId>>,
    answered: Vec<bool>,
    score: usize,
    phase: Phase,
    pending_selection: Option<OptionId>,
    rng: StdRng,
}

impl QuizSession {
    /// Start a fresh attempt: shuffle `questions` and stand at the first
    /// one with nothing answered.
    ///
    /// Pass `seed: Some(..)` for a reproducible order (the same session
    /// will also reshuffle deterministically across [`reset`]s); `None`
    /// seeds from entropy.
    ///
    /// [`reset`]: QuizSession::reset
    pub fn new(questions: Vec<Question>, seed: Option<u64>) -> Result<QuizSession, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let count = questions.len();
        Ok(QuizSession {
            questions: shuffled(&questions, &mut rng),
            current_index: 0,
            user_answers: vec![None; count],
            answered: vec![false; count],
            score: 0,
            phase: Phase::Selecting,
            pending_selection: None,
            rng,
        })
    }

    // ── operations ───────────────────────────────────────────────────────

    /// Tentatively pick an option for the current question.  Nothing is
    /// committed until [`submit_answer`](QuizSession::submit_answer).
    pub fn select_answer(&mut self, option: OptionId) -> Result<(), SessionError> {
        match self.phase {
            Phase::Selecting => {
                self.pending_selection = Some(option);
                Ok(())
            }
            Phase::Explaining => Err(SessionError::AlreadyAnswered),
            Phase::Complete => Err(SessionError::QuizComplete),
        }
    }

    /// Commit the pending selection for the current question.
    ///
    /// Records the answer, bumps the score when it is correct, and moves to
    /// `Explaining`.  Each question can only ever be submitted once, so the
    /// score counts it at most once no matter how often it is revisited.
    /// Returns whether the submitted choice was correct.
    pub fn submit_answer(&mut self) -> Result<bool, SessionError> {
        match self.phase {
            Phase::Explaining => Err(SessionError::AlreadyAnswered),
            Phase::Complete => Err(SessionError::QuizComplete),
            Phase::Selecting => {
                let choice = self.pending_selection.ok_or(SessionError::NoSelection)?;
                self.user_answers[self.current_index] = Some(choice);
                self.answered[self.current_index] = true;
                let correct = self.questions[self.current_index].is_correct(choice);
                if correct {
                    self.score += 1;
                }
                self.phase = Phase::Explaining;
                Ok(correct)
            }
        }
    }

    /// Advance to the next question, or to `Complete` from the last one.
    /// Blocked until the current question has an answer.
    pub fn go_next(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Selecting => Err(SessionError::CurrentUnanswered),
            Phase::Complete => Err(SessionError::QuizComplete),
            Phase::Explaining => {
                if self.current_index == self.questions.len() - 1 {
                    self.phase = Phase::Complete;
                } else {
                    self.focus(self.current_index + 1);
                }
                Ok(())
            }
        }
    }

    /// Step back one question.  Permitted from any phase (it never requires
    /// the current question to be answered), including out of `Complete`.
    pub fn go_previous(&mut self) -> Result<(), SessionError> {
        if self.current_index == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        self.focus(self.current_index - 1);
        Ok(())
    }

    /// Jump straight to any question, answered or not.  This is the "review
    /// answers" path out of `Complete`, and it is intentionally not gated
    /// the way [`go_next`](QuizSession::go_next) is.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange { index, len: self.questions.len() });
        }
        self.focus(index);
        Ok(())
    }

    /// Throw the attempt away: reshuffle the questions (drawing the next
    /// permutation from the session's own RNG) and clear every answer, the
    /// score, and the position.
    pub fn reset(&mut self) {
        self.questions = shuffled(&self.questions, &mut self.rng);
        let count = self.questions.len();
        self.user_answers = vec![None; count];
        self.answered = vec![false; count];
        self.score = 0;
        self.current_index = 0;
        self.phase = Phase::Selecting;
        self.pending_selection = None;
    }

    /// Move to `index` and restore what the user last saw there: an
    /// answered question comes back in `Explaining` with its recorded
    /// choice, an unanswered one in `Selecting` with nothing pending.
    fn focus(&mut self, index: usize) {
        self.current_index = index;
        if self.answered[index] {
            self.phase = Phase::Explaining;
            self.pending_selection = self.user_answers[index];
        } else {
            self.phase = Phase::Selecting;
            self.pending_selection = None;
        }
    }

    // ── observable state ─────────────────────────────────────────────────

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Never true: a session cannot be built from an empty bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_selection(&self) -> Option<OptionId> {
        self.pending_selection
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn user_answers(&self) -> &[Option<OptionId>] {
        &self.user_answers
    }

    pub fn answered(&self) -> &[bool] {
        &self.answered
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.get(index).copied().unwrap_or(false)
    }

    pub fn answered_count(&self) -> usize {
        self.answered.iter().filter(|&&a| a).count()
    }

    /// Score as a whole-number percentage of all questions, rounded.
    pub fn percentage(&self) -> u32 {
        (self.score as f64 * 100.0 / self.questions.len() as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::AnswerOption;

    fn question(n: usize, correct: OptionId) -> Question {
        let options = vec![
            AnswerOption { id: OptionId::A, text: format!("q{n} a") },
            AnswerOption { id: OptionId::B, text: format!("q{n} b") },
            AnswerOption { id: OptionId::C, text: format!("q{n} c") },
        ];
        Question::new(format!("question {n}"), options, correct, format!("why {n}")).unwrap()
    }

    fn session(count: usize) -> QuizSession {
        let qs = (0..count).map(|n| question(n, OptionId::A)).collect();
        QuizSession::new(qs, Some(11)).unwrap()
    }

    #[test]
    fn empty_bank_is_refused() {
        assert_eq!(QuizSession::new(Vec::new(), Some(1)).unwrap_err(), SessionError::EmptyBank);
    }

    #[test]
    fn focus_restores_recorded_answer() {
        let mut s = session(3);
        s.select_answer(OptionId::B).unwrap();
        s.submit_answer().unwrap();
        s.go_next().unwrap();
        assert_eq!(s.phase(), Phase::Selecting);
        assert_eq!(s.pending_selection(), None);

        s.go_previous().unwrap();
        assert_eq!(s.phase(), Phase::Explaining);
        assert_eq!(s.pending_selection(), Some(OptionId::B));
    }

    #[test]
    fn seeded_sessions_shuffle_identically() {
        let a = session(8);
        let b = session(8);
        let texts = |s: &QuizSession| {
            s.questions().iter().map(|q| q.text().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(texts(&a), texts(&b));
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = session(2);
        s.select_answer(OptionId::A).unwrap();
        s.submit_answer().unwrap();
        s.go_next().unwrap();
        s.reset();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.phase(), Phase::Selecting);
        assert_eq!(s.pending_selection(), None);
        assert!(s.answered().iter().all(|&a| !a));
        assert!(s.user_answers().iter().all(|a| a.is_none()));
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let mut s = session(3);
        s.select_answer(s.current_question().correct_answer()).unwrap();
        s.submit_answer().unwrap();
        // 1 of 3 → 33.33…% → 33
        assert_eq!(s.percentage(), 33);
        s.go_next().unwrap();
        s.select_answer(s.current_question().correct_answer()).unwrap();
        s.submit_answer().unwrap();
        // 2 of 3 → 66.67% → 67
        assert_eq!(s.percentage(), 67);
    }
}
