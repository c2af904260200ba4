//! Core quiz engine — question parsing, shuffling, and session state.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: option ids, validated questions, session phase |
//! | `parser`  | Plain-text question-bank parser with skip diagnostics |
//! | `shuffle` | Non-mutating Fisher–Yates permutation over any slice |
//! | `session` | The quiz attempt state machine: answer, score, navigate |
//! | `loader`  | Text-source collaborator trait + load-and-parse helper |
//! | `view`    | Read-only JSON view-state for presentation layers |

pub mod loader;
pub mod models;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod view;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use loader::{load_question_bank, FileSource, LoadError, QuestionSource};
pub use models::{AnswerOption, OptionId, Phase, Question, QuestionError};
pub use parser::{parse, parse_with_diagnostics, ParseReport, SkipReason, SkippedBlock};
pub use session::{QuizSession, SessionError};
pub use shuffle::shuffled;
pub use view::{completion_view, view_state};
