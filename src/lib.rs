//! # mcq_quiz_engine
//!
//! A self-contained, single-user multiple-choice quiz engine driven by a
//! plain-text question bank.
//!
//! The engine is three pieces:
//!
//! 1. A **parser** that turns unstructured bank text into validated
//!    [`Question`] records — pure, deterministic, and tolerant: a malformed
//!    block is skipped (with an optional diagnostic report), never fatal.
//! 2. A **shuffler** — a non-mutating Fisher–Yates permutation with an
//!    injectable random source, so tests can pin a seed.
//! 3. A **[`QuizSession`]** state machine that owns one quiz attempt:
//!    tentative selection, one-shot submission and scoring, bidirectional
//!    navigation that restores what the user last saw, jump-anywhere
//!    review, and reshuffling reset.
//!
//! Rendering, styling, and transition timing stay on the caller's side; the
//! [`view_state`] adapter hands a UI everything it needs as plain JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use mcq_quiz_engine::{parse, OptionId, Phase, QuizSession};
//!
//! let bank = "\
//! Q1. 2+2?
//! A. 3
//! B. 4
//! C. 5
//! Correct Answer: B
//! Explanation: Basic arithmetic.";
//!
//! let questions = parse(bank);
//! assert_eq!(questions.len(), 1);
//!
//! // Seeded for a reproducible shuffle; pass None for entropy.
//! let mut quiz = QuizSession::new(questions, Some(42)).unwrap();
//! quiz.select_answer(OptionId::B).unwrap();
//! assert!(quiz.submit_answer().unwrap());
//! assert_eq!(quiz.score(), 1);
//! assert_eq!(quiz.phase(), Phase::Explaining);
//!
//! quiz.go_next().unwrap();
//! assert_eq!(quiz.phase(), Phase::Complete);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `mcq_quiz_engine::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    completion_view, load_question_bank, parse, parse_with_diagnostics, shuffled, view_state,
    AnswerOption, FileSource, LoadError, OptionId, ParseReport, Phase, Question, QuestionError,
    QuestionSource, QuizSession, SessionError, SkipReason, SkippedBlock,
};
