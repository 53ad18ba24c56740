use std::collections::{HashMap, HashSet};

use crate::alphabet::Alphabet;
use crate::error::{Result, SolverError};
use crate::{debug_log, info_log};

/// Number of different characters in `word`.
pub fn distinct_letters(word: &str) -> usize {
    word.chars().collect::<HashSet<_>>().len()
}

/// Words tied for the highest distinct-letter count, in input order.
pub fn words_with_most_distinct_letters(words: &[String]) -> Vec<String> {
    let best = words.iter().map(|w| distinct_letters(w)).max().unwrap_or(0);
    words
        .iter()
        .filter(|w| distinct_letters(w) == best)
        .cloned()
        .collect()
}

/// How many words place each letter at `index`.
pub fn position_letter_counts(words: &[String], index: usize) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for word in words {
        if let Some(c) = word.chars().nth(index) {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}

/// Picks the next guess from `candidates`.
///
/// Keeps the words with the most distinct letters, then walks the positions
/// left to right, each time keeping only the words that carry the letter most
/// often seen at that position. Ties go to the letter that comes first in
/// `alphabet.letters()`. Returns the first survivor.
///
/// Fails with `InvalidInput` on an empty candidate set, a zero word length,
/// or a candidate shorter than `word_length`.
pub fn select_guess(candidates: &[String], alphabet: &Alphabet, word_length: usize) -> Result<String> {
    if candidates.is_empty() {
        return Err(SolverError::InvalidInput(
            "cannot select a guess from an empty candidate set".to_string(),
        ));
    }
    if word_length == 0 {
        return Err(SolverError::InvalidInput("word length must be positive".to_string()));
    }
    if let Some(short) = candidates.iter().find(|w| w.chars().count() < word_length) {
        return Err(SolverError::InvalidInput(format!(
            "candidate '{short}' is shorter than {word_length} letters"
        )));
    }

    let mut survivors = words_with_most_distinct_letters(candidates);
    debug_log!(
        "{} of {} candidates have the most distinct letters",
        survivors.len(),
        candidates.len()
    );

    for index in 0..word_length {
        let counts = position_letter_counts(&survivors, index);
        let Some(letter) = most_common_letter(&counts, alphabet) else {
            // nobody has an alphabet letter here, so the position cannot discriminate
            continue;
        };
        survivors.retain(|w| w.chars().nth(index) == Some(letter));
    }

    let guess = survivors.swap_remove(0);
    info_log!("selected guess '{guess}' from {} candidates", candidates.len());
    Ok(guess)
}

fn most_common_letter(counts: &HashMap<char, usize>, alphabet: &Alphabet) -> Option<char> {
    let mut best: Option<(char, usize)> = None;
    for letter in alphabet.letters() {
        let count = counts.get(&letter).copied().unwrap_or(0);
        if count > best.map_or(0, |(_, n)| n) {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}
