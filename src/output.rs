//! Terminal output formatting
//!
//! Rendering of guesses, patterns, and solve paths. The solver core emits
//! plain values; everything colored lives here.

use crate::commands::SolveResult;
use crate::core::{FeedbackPattern, FeedbackSymbol, Word};
use colored::Colorize;

/// Render a guess with each letter tinted by its feedback symbol
///
/// Exact letters are green, misplaced letters yellow, absent letters dimmed.
#[must_use]
pub fn colorize_guess(word: &Word, pattern: FeedbackPattern) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, symbol)| match symbol {
            FeedbackSymbol::Exact => letter.to_string().bright_green().bold().to_string(),
            FeedbackSymbol::Misplaced => letter.to_string().bright_yellow().bold().to_string(),
            FeedbackSymbol::Absent => letter.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Print the turn-by-turn path of a self-play run
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colorize_guess(&turn.word, turn.pattern),
            turn.pattern
        );

        if verbose {
            println!(
                "  Candidates: {} -> {}",
                turn.candidates_before, turn.candidates_after
            );
            println!("  Guaranteed eliminations: {}", turn.guaranteed_eliminations);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved after {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}
