//! Question-bank text parser.
//!
//! A bank is a plain-text file of blocks, each shaped like:
//!
//! ```text
//! Q12. What is 2+2?
//! A. 3
//! B. 4
//! C. 5
//! D. 22
//! Correct Answer: B
//! Explanation: Basic arithmetic.
//! ```
//!
//! Blocks start at a `Q<digits>.` marker and run to the next marker or end
//! of input.  Labels match case-insensitively, whitespace between fields is
//! insignificant, and the `D.` option is optional.  A block that violates
//! the grammar (or names a correct answer that is not one of its options)
//! is skipped; parsing always continues with the next block.  The question
//! number is positional noise and is not retained.

use thiserror::Error;

use crate::quiz_engine::models::{AnswerOption, OptionId, Question, QuestionError};

/// Why one block was dropped from the output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("missing \"{0}\" field")]
    MissingField(&'static str),
    #[error("no letter after \"Correct Answer:\"")]
    MissingAnswerLetter,
    #[error("correct-answer letter {0:?} is not one of A-D")]
    UnknownAnswerLetter(char),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

/// Location and cause of one skipped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// Zero-based position among all `Q<digits>.` blocks found in the input.
    pub ordinal: usize,
    /// Byte offset of the block's `Q` marker in the raw text.
    pub offset: usize,
    pub reason: SkipReason,
}

/// Full parse result: the questions that matched plus a report of every
/// block that did not.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedBlock>,
}

/// Parse a question bank, silently dropping malformed blocks.
///
/// Pure and deterministic; returns an empty vec when nothing matches.
/// Use [`parse_with_diagnostics`] to find out what was dropped and why.
pub fn parse(raw: &str) -> Vec<Question> {
    parse_with_diagnostics(raw).questions
}

/// Parse a question bank, reporting skipped blocks alongside the questions.
pub fn parse_with_diagnostics(raw: &str) -> ParseReport {
    let starts = block_starts(raw);
    let mut report = ParseReport::default();

    for (ordinal, &(offset, body_start)) in starts.iter().enumerate() {
        let body_end = starts.get(ordinal + 1).map_or(raw.len(), |&(next, _)| next);
        match parse_block(&raw[body_start..body_end]) {
            Ok(question) => report.questions.push(question),
            Err(reason) => report.skipped.push(SkippedBlock { ordinal, offset, reason }),
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Byte offsets of every `Q<digits>.` marker: (marker start, after the dot).
/// Markers must sit at the start of input or after whitespace, so a "Q3."
/// buried inside a word does not open a block.
fn block_starts(raw: &str) -> Vec<(usize, usize)> {
    let bytes = raw.as_bytes();
    let mut starts = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if (bytes[i] == b'Q' || bytes[i] == b'q') && at_boundary(bytes, i) {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b'.' {
                starts.push((i, j + 1));
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    starts
}

fn at_boundary(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || bytes[pos - 1].is_ascii_whitespace()
}

/// Case-insensitive search for an ASCII label (e.g. `"b."`) at a
/// whitespace boundary.  Returns (label start, content start).
fn find_label(src: &str, from: usize, label: &str) -> Option<(usize, usize)> {
    let bytes = src.as_bytes();
    let pat = label.as_bytes();
    let mut i = from;
    while i + pat.len() <= bytes.len() {
        if at_boundary(bytes, i)
            && bytes[i..i + pat.len()]
                .iter()
                .zip(pat)
                .all(|(b, p)| b.eq_ignore_ascii_case(p))
        {
            return Some((i, i + pat.len()));
        }
        i += 1;
    }
    None
}

/// Find `Correct Answer:` allowing any case and any run of whitespace
/// between the two words.  Returns (label start, content start).
fn find_answer_label(src: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = src.as_bytes();
    let mut search = from;
    while let Some((start, mut i)) = find_label(src, search, "correct") {
        search = start + 1;
        let ws_start = i;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i == ws_start {
            continue; // "correctly", "corrections", ...
        }
        let word = b"answer:";
        if i + word.len() <= bytes.len()
            && bytes[i..i + word.len()]
                .iter()
                .zip(word)
                .all(|(b, p)| b.eq_ignore_ascii_case(p))
        {
            return Some((start, i + word.len()));
        }
    }
    None
}

/// Parse one block body (everything after its `Q<digits>.` marker).
fn parse_block(body: &str) -> Result<Question, SkipReason> {
    let (a_pos, a_text) = find_label(body, 0, "a.").ok_or(SkipReason::MissingField("A."))?;
    let (b_pos, b_text) = find_label(body, a_text, "b.").ok_or(SkipReason::MissingField("B."))?;
    let (c_pos, c_text) = find_label(body, b_text, "c.").ok_or(SkipReason::MissingField("C."))?;
    let (ans_pos, ans_text) =
        find_answer_label(body, c_text).ok_or(SkipReason::MissingField("Correct Answer:"))?;
    let (expl_pos, expl_text) = find_label(body, ans_text, "explanation:")
        .ok_or(SkipReason::MissingField("Explanation:"))?;

    let mut options = vec![
        option(OptionId::A, &body[a_text..b_pos]),
        option(OptionId::B, &body[b_text..c_pos]),
    ];
    // D is optional; it only counts if it sits between C and the answer line.
    match find_label(body, c_text, "d.").filter(|&(d_pos, _)| d_pos < ans_pos) {
        Some((d_pos, d_text)) => {
            options.push(option(OptionId::C, &body[c_text..d_pos]));
            options.push(option(OptionId::D, &body[d_text..ans_pos]));
        }
        None => options.push(option(OptionId::C, &body[c_text..ans_pos])),
    }

    let letter = body[ans_text..expl_pos]
        .chars()
        .find(|c| !c.is_whitespace())
        .ok_or(SkipReason::MissingAnswerLetter)?;
    let correct = OptionId::from_letter(letter).ok_or(SkipReason::UnknownAnswerLetter(letter))?;

    let question = Question::new(
        body[..a_pos].trim(),
        options,
        correct,
        body[expl_text..].trim(),
    )?;
    Ok(question)
}

fn option(id: OptionId, text: &str) -> AnswerOption {
    AnswerOption { id, text: text.trim().to_string() }
}
