use chrono::{DateTime, Duration, Local};

use crate::alphabet::Alphabet;
use crate::error::{Result, SolverError};
use crate::feedback::{AttemptOutcome, PuzzleParameters, score_guess};
use crate::filter::{filter_by_initial_requirements, refine};
use crate::solver::select_guess;
use crate::{debug_log, info_log};

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// The side of the game that knows the target word.
///
/// Implemented by the interactive prompt in `cli` and by [`LocalPuzzle`];
/// a network-backed puzzle would implement it the same way.
pub trait Puzzle {
    /// Word length and vowel/consonant counts of the target.
    fn parameters(&mut self) -> Result<PuzzleParameters>;

    /// Adjudicates one guess.
    fn submit(&mut self, guess: &str) -> Result<AttemptOutcome>;
}

/// Summary of one finished game.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub solved: bool,
    pub guesses: Vec<String>,
    pub remaining_candidates: usize,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

impl GameReport {
    pub fn last_guess(&self) -> Option<&str> {
        self.guesses.last().map(String::as_str)
    }
}

/// Plays one game: filters the bank by the puzzle parameters, then guesses,
/// submits and refines until the puzzle reports a solve or `max_attempts`
/// guesses have been played.
///
/// The word bank is only read; every round builds a fresh candidate set.
pub fn play<P: Puzzle + ?Sized>(
    word_bank: &[String],
    alphabet: &Alphabet,
    puzzle: &mut P,
    max_attempts: usize,
) -> Result<GameReport> {
    if max_attempts == 0 {
        return Err(SolverError::InvalidInput(
            "at least one attempt is required".to_string(),
        ));
    }

    let started_at = Local::now();
    let params = puzzle.parameters()?;
    info_log!(
        "puzzle: {} letters, {} vowels, {} consonants",
        params.word_length,
        params.vowels,
        params.consonants
    );

    let mut candidates = filter_by_initial_requirements(
        word_bank,
        alphabet,
        params.word_length,
        params.vowels,
        params.consonants,
    );
    if candidates.is_empty() {
        return Err(SolverError::NoCandidatesRemaining);
    }

    let mut guesses = Vec::new();
    let mut solved = false;
    while guesses.len() < max_attempts {
        let guess = select_guess(&candidates, alphabet, params.word_length)?;
        let outcome = puzzle.submit(&guess)?;
        debug_log!(
            "attempt {}: '{}' -> {:?}, misplaced {:?}",
            outcome.attempt_index,
            guess,
            outcome.attempt.positions(),
            outcome.attempt.misplaced()
        );
        guesses.push(guess);

        if outcome.solved {
            solved = true;
            break;
        }

        candidates = refine(&candidates, &outcome.attempt);
        if candidates.is_empty() {
            return Err(SolverError::NoCandidatesRemaining);
        }
    }

    let report = GameReport {
        solved,
        guesses,
        remaining_candidates: candidates.len(),
        started_at,
        elapsed: Local::now().signed_duration_since(started_at),
    };
    info_log!(
        "game over after {} guesses (solved: {}) in {} ms",
        report.guesses.len(),
        report.solved,
        report.elapsed.num_milliseconds()
    );
    Ok(report)
}

/// A puzzle adjudicated in-process against a known target.
#[derive(Debug, Clone)]
pub struct LocalPuzzle {
    target: String,
    params: PuzzleParameters,
    attempts: usize,
}

impl LocalPuzzle {
    pub fn new(target: &str, alphabet: &Alphabet) -> Result<Self> {
        let target = target.trim().to_lowercase();
        if target.is_empty() {
            return Err(SolverError::InvalidInput("target word is empty".to_string()));
        }
        let params = PuzzleParameters {
            word_length: target.chars().count(),
            vowels: alphabet.count_vowels(&target),
            consonants: alphabet.count_consonants(&target),
        };
        Ok(Self {
            target,
            params,
            attempts: 0,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Puzzle for LocalPuzzle {
    fn parameters(&mut self) -> Result<PuzzleParameters> {
        Ok(self.params)
    }

    fn submit(&mut self, guess: &str) -> Result<AttemptOutcome> {
        let attempt = score_guess(guess, &self.target)?;
        self.attempts += 1;
        Ok(AttemptOutcome {
            solved: attempt.is_solved(),
            attempt,
            attempt_index: self.attempts,
        })
    }
}
