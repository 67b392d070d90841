//! Wordle Min-Max Solver - CLI
//!
//! Interactive solver for the five-letter word-guessing game, choosing each
//! guess by maximizing the guaranteed number of eliminated candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_minimax::{
    commands::{SolveOptions, run_interactive, solve_word},
    core::Word,
    output::print_solve_result,
    wordlists::loader::{builtin, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver using a min-max elimination strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or a path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver mode (default)
    Play,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Force the opening guess instead of selecting one
        #[arg(short, long)]
        first: Option<String>,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => builtin().context("embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_interactive(&dictionary),
        Commands::Solve {
            word,
            first,
            verbose,
        } => run_solve_command(&word, first.as_deref(), verbose, &dictionary),
    }
}

fn run_solve_command(
    target: &str,
    first: Option<&str>,
    verbose: bool,
    dictionary: &[Word],
) -> Result<()> {
    let target = Word::new(target).context("invalid target word")?;

    let mut options = SolveOptions::new(target);
    if let Some(first) = first {
        options.first_guess = Some(Word::new(first).context("invalid opening guess")?);
    }

    let result = solve_word(&options, dictionary)?;
    print_solve_result(&result, verbose);
    Ok(())
}
