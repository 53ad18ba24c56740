use anyhow::{Context, Result};
use std::io;

use wordle_guesser::cli::{
    CliPuzzle, display_no_candidates_message, display_report, display_wordbank_size, parse_cli,
};
use wordle_guesser::{LocalPuzzle, Puzzle, SolverError, logging, play, resolve_wordbank};

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let word_bank = resolve_wordbank(cli.wordbank_path.as_deref()).with_context(|| match &cli.wordbank_path {
        Some(path) => format!("failed to load word bank from '{}'", path.display()),
        None => "failed to load the default word bank".to_string(),
    })?;
    if word_bank.is_empty() {
        anyhow::bail!("the word bank is empty");
    }
    display_wordbank_size(word_bank.len());

    let alphabet = cli.alphabet.alphabet();
    let mut puzzle: Box<dyn Puzzle> = match &cli.target {
        Some(target) => Box::new(
            LocalPuzzle::new(target, &alphabet).context("invalid target word")?,
        ),
        None => Box::new(CliPuzzle::new(io::stdin().lock())),
    };

    match play(&word_bank, &alphabet, puzzle.as_mut(), cli.max_attempts) {
        Ok(report) => {
            display_report(&report);
            Ok(())
        }
        Err(SolverError::NoCandidatesRemaining) => {
            display_no_candidates_message();
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}

