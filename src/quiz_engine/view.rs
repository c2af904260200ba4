//! JSON view-state for presentation layers.
//!
//! Pure read-only projection of a [`QuizSession`] into the shape a UI
//! binds to: per-option highlight states, submit/navigation enablement,
//! the question-navigator dots, and the completion card.  Nothing here
//! feeds back into session logic; rendering, styling, and any transition
//! timing stay entirely on the caller's side.

use serde_json::{json, Value};

use crate::quiz_engine::models::{AnswerOption, OptionId, Phase};
use crate::quiz_engine::session::QuizSession;

/// Highlight state for one option row.
///
/// While selecting: the pending pick is `selected`, the rest `idle`.
/// While explaining: the correct option is `correct`, a wrong pick is
/// `incorrect`, and everything else is `dimmed`.
fn option_state(session: &QuizSession, id: OptionId) -> &'static str {
    let chosen = session.pending_selection() == Some(id);
    match session.phase() {
        Phase::Selecting => {
            if chosen {
                "selected"
            } else {
                "idle"
            }
        }
        _ => {
            if session.current_question().is_correct(id) {
                "correct"
            } else if chosen {
                "incorrect"
            } else {
                "dimmed"
            }
        }
    }
}

fn option_entry(session: &QuizSession, option: &AnswerOption) -> Value {
    let explaining = session.phase() == Phase::Explaining;
    let correct = session.current_question().is_correct(option.id);
    let chosen = session.pending_selection() == Some(option.id);
    json!({
        "id": option.id.as_char().to_string(),
        "text": option.text,
        "state": option_state(session, option.id),
        "show_check": explaining && correct,
        "show_cross": explaining && chosen && !correct,
    })
}

/// One navigator dot per question, colour-coded by outcome.
fn navigator(session: &QuizSession) -> Value {
    let dots: Vec<Value> = (0..session.len())
        .map(|i| {
            let state = if i == session.current_index() && session.phase() != Phase::Complete {
                "current"
            } else if session.is_answered(i) {
                match session.user_answers()[i] {
                    Some(choice) if session.questions()[i].is_correct(choice) => "correct",
                    _ => "incorrect",
                }
            } else {
                "unanswered"
            };
            json!({ "index": i, "state": state })
        })
        .collect();
    Value::Array(dots)
}

fn controls(session: &QuizSession) -> Value {
    json!({
        "can_submit": session.phase() == Phase::Selecting && session.pending_selection().is_some(),
        "can_go_previous": session.current_index() > 0,
        "can_go_next": session.phase() == Phase::Explaining,
        "next_label": if session.current_index() < session.len() - 1 {
            "Next Question"
        } else {
            "See Results"
        },
    })
}

/// Everything a question screen needs, as one JSON value.
///
/// In `Complete` phase the `question` block still reflects the last viewed
/// question; callers showing a results screen use [`completion_view`]
/// instead and keep the navigator for the "review answers" jump.
pub fn view_state(session: &QuizSession) -> Value {
    let question = session.current_question();
    let explanation = match session.phase() {
        Phase::Explaining => Value::String(question.explanation().to_string()),
        _ => Value::Null,
    };
    json!({
        "phase": session.phase().to_string(),
        "question_number": session.current_index() + 1,
        "question_count": session.len(),
        "score": session.score(),
        "progress_pct": ((session.current_index() + 1) * 100) as f64 / session.len() as f64,
        "question": {
            "text": question.text(),
            "options": question.options().iter()
                .map(|o| option_entry(session, o))
                .collect::<Vec<_>>(),
        },
        "explanation": explanation,
        "controls": controls(session),
        "navigator": navigator(session),
    })
}

/// The results card: score, rounded percentage, and a tiered message.
pub fn completion_view(session: &QuizSession) -> Value {
    let pct = session.percentage();
    let (message, tone) = if pct >= 90 {
        ("Outstanding! A near-perfect run!", "success")
    } else if pct >= 70 {
        ("Great job! That's solid knowledge!", "info")
    } else if pct >= 50 {
        ("Good effort! Keep practicing!", "notice")
    } else {
        ("Keep studying! There's more to learn!", "warn")
    };
    json!({
        "score": session.score(),
        "total": session.len(),
        "percentage": pct,
        "message": message,
        "tone": tone,
    })
}
