//! The "give me the raw question-bank text" collaborator boundary.
//!
//! Where the text comes from is not the engine's business; callers hand in
//! anything that implements [`QuestionSource`].  A load failure propagates
//! unchanged and leaves no session behind.  Parsing itself never fails —
//! an unusable bank simply yields an empty question list, which callers
//! must refuse to start a session from.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::quiz_engine::models::Question;
use crate::quiz_engine::parser::parse;

/// The text-loading collaborator failed; no questions were produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("question source failed: {0}")]
    Source(String),
}

/// Anything that can produce the raw text of a question bank.
pub trait QuestionSource {
    fn load_text(&self) -> Result<String, LoadError>;
}

/// A question bank stored as a plain-text file on disk.
pub struct FileSource(pub PathBuf);

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> FileSource {
        FileSource(path.as_ref().to_path_buf())
    }
}

impl QuestionSource for FileSource {
    fn load_text(&self) -> Result<String, LoadError> {
        Ok(std::fs::read_to_string(&self.0)?)
    }
}

/// Load and parse a question bank in one call.
///
/// `Err` means the source failed; `Ok(vec![])` means the text had no
/// parseable blocks.
pub fn load_question_bank(source: &impl QuestionSource) -> Result<Vec<Question>, LoadError> {
    Ok(parse(&source.load_text()?))
}
