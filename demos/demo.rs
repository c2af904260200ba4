//! End-to-end walkthrough of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `mcq_quiz_engine` works end to end:
//!
//! 1. **Parsing** — a small embedded question bank is parsed, including one
//!    deliberately broken block so the skip diagnostics have something to
//!    report.
//! 2. **A scripted attempt** — a seeded session is driven through select,
//!    submit, navigate and review, printing the observable state after each
//!    step the way a presentation layer would read it.
//! 3. **The JSON view-state** — the same state rendered through the
//!    `view_state` / `completion_view` adapters.
//!
//! `rng_seed: Some(u64)` makes the shuffle (and every reshuffle on reset)
//! fully deterministic, so this demo prints the same thing every run.

use mcq_quiz_engine::{
    completion_view, parse_with_diagnostics, view_state, Phase, QuizSession,
};

const BANK: &str = "\
Q1. Which planet is closest to the sun?
A. Venus
B. Mercury
C. Mars
Correct Answer: B
Explanation: Mercury orbits at roughly 58 million km, closer than any other planet.

Q2. What does CPU stand for?
A. Central Processing Unit
B. Computer Personal Unit
C. Central Program Utility
D. Core Processing Underlay
Correct Answer: A
Explanation: The CPU is the part of a computer that executes instructions.

Q3. This block is broken on purpose.
A. It has options
B. But no correct answer line
C. So the parser must skip it
Explanation: never reached.

Q4. How many minutes are in a day?
A. 1440
B. 3600
C. 86400
Correct Answer: A
Explanation: 24 hours times 60 minutes.";

fn print_current(quiz: &QuizSession) {
    let q = quiz.current_question();
    println!(
        "  [{}/{}] {}  (phase: {}, score: {})",
        quiz.current_index() + 1,
        quiz.len(),
        q.text(),
        quiz.phase(),
        quiz.score()
    );
    for opt in q.options() {
        let marker = match quiz.pending_selection() {
            Some(id) if id == opt.id => ">",
            _ => " ",
        };
        println!("    {marker} {}. {}", opt.id, opt.text);
    }
    if quiz.phase() == Phase::Explaining {
        println!("    explanation: {}", q.explanation());
    }
    println!();
}

fn main() {
    // ── Parsing with diagnostics ─────────────────────────────────────────
    println!();
    println!("══ Parsing the bank ══");
    println!();
    let report = parse_with_diagnostics(BANK);
    println!("  parsed {} questions, skipped {} block(s)", report.questions.len(), report.skipped.len());
    for skip in &report.skipped {
        println!("  skipped block #{} at byte {}: {}", skip.ordinal + 1, skip.offset, skip.reason);
    }
    println!();

    // ── A scripted attempt ───────────────────────────────────────────────
    // Seeded, so the shuffled order below never changes between runs.
    println!("══ A scripted attempt (seed 42) ══");
    println!();
    let mut quiz = QuizSession::new(report.questions, Some(42)).expect("bank is not empty");

    while quiz.phase() != Phase::Complete {
        print_current(&quiz);

        // Play deliberately: correct on even indexes, wrong on odd ones.
        let q = quiz.current_question();
        let choice = if quiz.current_index() % 2 == 0 {
            q.correct_answer()
        } else {
            q.options().iter().map(|o| o.id).find(|&id| id != q.correct_answer()).unwrap()
        };
        quiz.select_answer(choice).expect("selecting is allowed here");
        let correct = quiz.submit_answer().expect("a selection is pending");
        println!("  submitted {choice} -> {}", if correct { "correct!" } else { "wrong" });
        print_current(&quiz);

        quiz.go_next().expect("answered, so advancing is allowed");
    }

    println!("  quiz complete: {}/{} ({}%)", quiz.score(), quiz.len(), quiz.percentage());
    println!();

    // ── Review answers ───────────────────────────────────────────────────
    // Jumping out of Complete restores exactly what the user saw.
    println!("══ Review: jump back to question 1 ══");
    println!();
    quiz.jump_to(0).expect("index 0 always exists");
    print_current(&quiz);

    // ── JSON view-state ──────────────────────────────────────────────────
    println!("══ View-state JSON for the presentation layer ══");
    println!();
    println!("{}", serde_json::to_string_pretty(&view_state(&quiz)).unwrap());
    println!();

    quiz.jump_to(quiz.len() - 1).expect("last index exists");
    quiz.go_next().expect("last question is answered");
    println!("══ Completion card ══");
    println!();
    println!("{}", serde_json::to_string_pretty(&completion_view(&quiz)).unwrap());
    println!();

    // ── Reset ────────────────────────────────────────────────────────────
    quiz.reset();
    println!("══ After reset ══");
    println!();
    print_current(&quiz);
}
