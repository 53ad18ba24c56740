//! Feedback payloads exchanged with the puzzle collaborator.

use crate::error::{Result, SolverError};

/// One flag per letter of the guess: `true` iff that letter is in the right position.
pub type PositionFeedback = Vec<bool>;

/// Letters present in the target but not where the guess put them.
pub type MisplacedLetters = Vec<char>;

/// Word length plus vowel/consonant counts announced at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleParameters {
    pub word_length: usize,
    pub vowels: usize,
    pub consonants: usize,
}

/// The complete feedback for one round: the word played, its position
/// feedback and the misplaced letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    word: String,
    positions: PositionFeedback,
    misplaced: MisplacedLetters,
}

impl GuessAttempt {
    /// Fails with `InvalidInput` when `positions` does not have one entry per
    /// letter of `word`.
    pub fn new(
        word: impl Into<String>,
        positions: PositionFeedback,
        misplaced: MisplacedLetters,
    ) -> Result<Self> {
        let word = word.into();
        let length = word.chars().count();
        if positions.len() != length {
            return Err(SolverError::InvalidInput(format!(
                "position feedback has {} entries but '{word}' has {length} letters",
                positions.len()
            )));
        }
        Ok(Self {
            word,
            positions,
            misplaced,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn positions(&self) -> &[bool] {
        &self.positions
    }

    pub fn misplaced(&self) -> &[char] {
        &self.misplaced
    }

    /// True when every position was confirmed.
    pub fn is_solved(&self) -> bool {
        self.positions.iter().all(|&right| right)
    }
}

/// What the puzzle collaborator returns for a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub attempt: GuessAttempt,
    pub solved: bool,
    /// 1-based index of this attempt as counted by the collaborator.
    pub attempt_index: usize,
}

/// Adjudicates `guess` against a known `target`.
///
/// Position `i` is right iff both words share the letter there. Misplaced
/// letters are the guess letters at unmatched positions that occur somewhere
/// in the target, each reported once.
pub fn score_guess(guess: &str, target: &str) -> Result<GuessAttempt> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let target_letters: Vec<char> = target.chars().collect();
    if guess_letters.len() != target_letters.len() {
        return Err(SolverError::InvalidInput(format!(
            "guess '{guess}' and target '{target}' differ in length"
        )));
    }

    let positions: PositionFeedback = guess_letters
        .iter()
        .zip(&target_letters)
        .map(|(g, t)| g == t)
        .collect();

    let mut misplaced = MisplacedLetters::new();
    for (i, &letter) in guess_letters.iter().enumerate() {
        if !positions[i] && target_letters.contains(&letter) && !misplaced.contains(&letter) {
            misplaced.push(letter);
        }
    }

    GuessAttempt::new(guess, positions, misplaced)
}
