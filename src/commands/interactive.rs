//! Interactive prompt-loop mode
//!
//! The terminal collaborator around the solver session: asks the player for
//! their opening word and its colors, then alternates suggested guesses and
//! feedback until the answer is pinned down. Bad input is re-solicited
//! here; the solver core never retries anything.

use crate::core::{FeedbackPattern, Word};
use crate::output::colorize_guess;
use crate::solver::{Session, SolveError, Status};
use colored::Colorize;
use std::io::{self, Write as _};

/// Run the interactive solver loop over the given dictionary
///
/// # Errors
/// Returns an error on I/O failure or when the session hits a terminal
/// solver error (contradictory feedback, dictionary gap).
pub fn run_interactive(dictionary: &[Word]) -> anyhow::Result<()> {
    println!("\n{}", "WORDLE MIN-MAX SOLVER".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("Play your opening guess, then report the colors after each");
    println!("guess as five letters:");
    println!("  G  green  (correct position)");
    println!("  Y  yellow (in the word, wrong position)");
    println!("  B  black  (not in the word)");
    println!("Commands: 'new' restarts, 'quit' exits.\n");

    loop {
        match play_one_game(dictionary)? {
            Outcome::PlayAgain => println!("\nNew game started.\n"),
            Outcome::Quit => return Ok(()),
        }
    }
}

enum Outcome {
    PlayAgain,
    Quit,
}

enum Reply<T> {
    Value(T),
    NewGame,
    Quit,
}

fn play_one_game(dictionary: &[Word]) -> anyhow::Result<Outcome> {
    let mut session = Session::new(dictionary);

    // The opening word is the player's choice; the solver never picks it
    let word = match prompt_word("Enter your opening guess")? {
        Reply::Value(word) => word,
        Reply::NewGame => return Ok(Outcome::PlayAgain),
        Reply::Quit => return Ok(Outcome::Quit),
    };
    let pattern = match prompt_pattern("Enter colors (e.g. BBYGY)")? {
        Reply::Value(pattern) => pattern,
        Reply::NewGame => return Ok(Outcome::PlayAgain),
        Reply::Quit => return Ok(Outcome::Quit),
    };

    let mut status = session.record(word, pattern).map_err(terminal)?;

    loop {
        match status {
            Status::Solved(answer) => {
                println!(
                    "\nFinal answer: {}\n",
                    answer.text().to_uppercase().bright_green().bold()
                );
                return match prompt_line("Play again? (yes/no)")?.as_str() {
                    "yes" | "y" => Ok(Outcome::PlayAgain),
                    _ => Ok(Outcome::Quit),
                };
            }
            Status::Guessing { remaining } => {
                println!("\n{remaining} candidates remaining");
                if remaining <= 10 {
                    for candidate in session.candidates() {
                        println!("  {}", candidate.text().to_uppercase());
                    }
                }

                let suggestion = session.suggest().map_err(terminal)?.clone();
                println!("Try {}.", suggestion.text().to_uppercase().bold());

                let pattern = match prompt_pattern("Enter colors")? {
                    Reply::Value(pattern) => pattern,
                    Reply::NewGame => return Ok(Outcome::PlayAgain),
                    Reply::Quit => return Ok(Outcome::Quit),
                };

                println!("  {}", colorize_guess(&suggestion, pattern));
                status = session.feedback(pattern).map_err(terminal)?;
            }
        }
    }
}

/// Report a terminal solver error to the player before propagating it
fn terminal(error: SolveError) -> anyhow::Error {
    if error == SolveError::EmptyCandidateSet {
        println!(
            "\n{}",
            "No candidates remain: the reported colors contradict each \
             other, or the hidden word is not in the dictionary."
                .red()
        );
    }
    error.into()
}

fn prompt_word(prompt: &str) -> anyhow::Result<Reply<Word>> {
    loop {
        let input = prompt_line(prompt)?;
        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "new" | "n" => return Ok(Reply::NewGame),
            text => match Word::new(text) {
                Ok(word) => return Ok(Reply::Value(word)),
                Err(e) => println!("Invalid word: {e}"),
            },
        }
    }
}

fn prompt_pattern(prompt: &str) -> anyhow::Result<Reply<FeedbackPattern>> {
    loop {
        let input = prompt_line(prompt)?;
        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "new" | "n" => return Ok(Reply::NewGame),
            // The core's encoding contract is uppercase B/Y/G; normalize
            // here so players can type either case
            text => match FeedbackPattern::parse(&text.to_uppercase()) {
                Ok(pattern) => return Ok(Reply::Value(pattern)),
                Err(e) => println!("Invalid feedback: {e}"),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase())
}
