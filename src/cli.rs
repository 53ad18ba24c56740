use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

use crate::alphabet::Alphabet;
use crate::error::{Result, SolverError};
use crate::feedback::{AttemptOutcome, GuessAttempt, MisplacedLetters, PositionFeedback, PuzzleParameters};
use crate::game_state::{DEFAULT_MAX_ATTEMPTS, GameReport, Puzzle};

/// Wordle guesser: narrows a word bank down to the target word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a whitespace-separated word bank file
    #[arg(short = 'i', long = "input", env = "WORDLE_WORDBANK")]
    pub wordbank_path: Option<PathBuf>,

    /// Play offline against this target word instead of asking for feedback
    #[arg(short, long)]
    pub target: Option<String>,

    /// Letter set used to count vowels and consonants
    #[arg(short, long, value_enum, default_value_t = AlphabetChoice::Spanish)]
    pub alphabet: AlphabetChoice,

    /// Maximum number of guesses to play
    #[arg(short, long, env = "WORDLE_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Log filter and round details
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetChoice {
    Spanish,
    English,
}

impl AlphabetChoice {
    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::Spanish => Alphabet::spanish(),
            Self::English => Alphabet::english(),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Input parsing

/// Parses `length vowels consonants`, separated by spaces or commas.
pub fn parse_parameters(line: &str) -> Option<PuzzleParameters> {
    let numbers: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    match numbers.as_slice() {
        &[word_length, vowels, consonants]
            if word_length > 0
                && vowels
                    .checked_add(consonants)
                    .is_some_and(|letters| letters <= word_length) =>
        {
            Some(PuzzleParameters {
                word_length,
                vowels,
                consonants,
            })
        }
        _ => None,
    }
}

/// Parses a position mask: `G` marks a right position, `X` or `Y` anything else.
pub fn parse_position_feedback(line: &str, length: usize) -> Option<PositionFeedback> {
    let feedback: Option<PositionFeedback> = line
        .trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'G' => Some(true),
            'X' | 'Y' => Some(false),
            _ => None,
        })
        .collect();
    feedback.filter(|positions| positions.len() == length)
}

/// Letters of `line`, lowercased; spaces and commas are ignored.
pub fn parse_misplaced_letters(line: &str) -> MisplacedLetters {
    line.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(SolverError::Puzzle("input closed".to_string()));
    }
    Ok(input.trim().to_string())
}

/// Interactive puzzle: prints each guess and reads the feedback the player
/// got for it.
pub struct CliPuzzle<R: BufRead> {
    reader: R,
    word_length: usize,
    attempts: usize,
}

impl<R: BufRead> CliPuzzle<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            word_length: 0,
            attempts: 0,
        }
    }

    fn read_position_feedback(&mut self) -> Result<PositionFeedback> {
        loop {
            println!(
                "Enter position feedback ({} characters, G=right position, X=otherwise, e.g. XXGGG):",
                self.word_length
            );
            let line = read_trimmed_line(&mut self.reader)?;
            match parse_position_feedback(&line, self.word_length) {
                Some(positions) => return Ok(positions),
                None => println!("Invalid feedback. Use exactly {} G/X characters.", self.word_length),
            }
        }
    }
}

impl<R: BufRead> Puzzle for CliPuzzle<R> {
    fn parameters(&mut self) -> Result<PuzzleParameters> {
        loop {
            println!("Enter word length, vowel count and consonant count (e.g. 5 2 3):");
            let line = read_trimmed_line(&mut self.reader)?;
            if let Some(params) = parse_parameters(&line) {
                self.word_length = params.word_length;
                return Ok(params);
            }
            println!("Invalid parameters. Enter three numbers; vowels plus consonants cannot exceed the length.");
        }
    }

    fn submit(&mut self, guess: &str) -> Result<AttemptOutcome> {
        self.attempts += 1;
        println!("\nAttempt {}: {guess}", self.attempts);

        let positions = self.read_position_feedback()?;
        let misplaced = if positions.iter().all(|&right| right) {
            MisplacedLetters::new()
        } else {
            println!("Enter letters in the word but in the wrong position (blank for none):");
            parse_misplaced_letters(&read_trimmed_line(&mut self.reader)?)
        };

        let attempt = GuessAttempt::new(guess, positions, misplaced)?;
        Ok(AttemptOutcome {
            solved: attempt.is_solved(),
            attempt,
            attempt_index: self.attempts,
        })
    }
}

pub fn display_wordbank_size(count: usize) {
    println!("Loaded {count} words.");
}

pub fn display_report(report: &GameReport) {
    for (i, guess) in report.guesses.iter().enumerate() {
        println!("Attempt {}: {guess}", i + 1);
    }
    match (report.solved, report.last_guess()) {
        (true, Some(word)) => println!("Word found: {word}"),
        _ => println!(
            "Not solved after {} attempts ({} candidates left).",
            report.guesses.len(),
            report.remaining_candidates
        ),
    }
    println!(
        "Started at {}, total time to find the word: {:.3} seconds",
        report.started_at.format("%Y-%m-%d %H:%M:%S"),
        report.elapsed.num_milliseconds() as f64 / 1000.0
    );
}

pub fn display_no_candidates_message() {
    println!("No candidates remain. Check the feedback or the word bank.");
}
