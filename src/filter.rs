//! Candidate filtering.
//!
//! Every function here is a stable filter: it reads its input slice and
//! returns a new vector holding the kept words in their original order.

use crate::alphabet::Alphabet;
use crate::debug_log;
use crate::feedback::GuessAttempt;

/// Keeps words of `length` characters with exactly `vowels` vowels and
/// `consonants` consonants, as classified by `alphabet`.
pub fn filter_by_initial_requirements(
    words: &[String],
    alphabet: &Alphabet,
    length: usize,
    vowels: usize,
    consonants: usize,
) -> Vec<String> {
    let by_length: Vec<&String> = words
        .iter()
        .filter(|word| word.chars().count() == length)
        .collect();
    let by_vowels: Vec<&String> = by_length
        .into_iter()
        .filter(|word| alphabet.count_vowels(word) == vowels)
        .collect();
    let kept: Vec<String> = by_vowels
        .into_iter()
        .filter(|word| alphabet.count_consonants(word) == consonants)
        .cloned()
        .collect();

    debug_log!(
        "initial requirements (length {length}, {vowels} vowels, {consonants} consonants) kept {} of {} words",
        kept.len(),
        words.len()
    );
    kept
}

/// Narrows `words` with the feedback of the last round: right positions,
/// then confirmed-absent letters, then misplaced letters.
pub fn refine(words: &[String], attempt: &GuessAttempt) -> Vec<String> {
    let right = filter_right_positions(words, attempt);
    let without_wrong = filter_wrong_letters(&right, attempt);
    let refined = filter_misplaced_letters(&without_wrong, attempt);

    debug_log!(
        "refine on '{}': {} -> {} (right positions) -> {} (wrong letters) -> {} (misplaced)",
        attempt.word(),
        words.len(),
        right.len(),
        without_wrong.len(),
        refined.len()
    );
    refined
}

/// Keeps words that repeat the guess letter at every confirmed position.
pub fn filter_right_positions(words: &[String], attempt: &GuessAttempt) -> Vec<String> {
    let guess: Vec<char> = attempt.word().chars().collect();
    let confirmed = attempt.positions().iter().filter(|&&right| right).count();

    words
        .iter()
        .filter(|word| {
            let matching = word
                .chars()
                .zip(guess.iter().zip(attempt.positions()))
                .filter(|(w, (g, right))| **right && w == *g)
                .count();
            matching == confirmed
        })
        .cloned()
        .collect()
}

/// Letters of the guess proven absent from the target, in guess order.
///
/// A letter is absent when its position was not confirmed, it was not
/// reported misplaced, and it does not sit at some other confirmed position.
pub fn confirmed_absent_letters(attempt: &GuessAttempt) -> Vec<char> {
    let guess: Vec<char> = attempt.word().chars().collect();
    let positions = attempt.positions();
    let confirmed_letters: Vec<char> = guess
        .iter()
        .zip(positions)
        .filter(|(_, right)| **right)
        .map(|(&letter, _)| letter)
        .collect();

    let mut absent = Vec::new();
    for (&letter, &right) in guess.iter().zip(positions) {
        if !right
            && !attempt.misplaced().contains(&letter)
            && !confirmed_letters.contains(&letter)
            && !absent.contains(&letter)
        {
            absent.push(letter);
        }
    }
    absent
}

/// Drops every word containing a confirmed-absent letter.
pub fn filter_wrong_letters(words: &[String], attempt: &GuessAttempt) -> Vec<String> {
    let absent = confirmed_absent_letters(attempt);
    words
        .iter()
        .filter(|word| !word.chars().any(|c| absent.contains(&c)))
        .cloned()
        .collect()
}

/// Keeps words holding every misplaced letter, then drops words that put a
/// letter back at an unconfirmed position it already failed at.
///
/// If no word holds every misplaced letter the input is returned unchanged.
pub fn filter_misplaced_letters(words: &[String], attempt: &GuessAttempt) -> Vec<String> {
    let with_misplaced: Vec<&String> = words
        .iter()
        .filter(|word| attempt.misplaced().iter().all(|&letter| word.contains(letter)))
        .collect();
    if with_misplaced.is_empty() {
        debug_log!(
            "no word holds all misplaced letters {:?}; keeping {} words",
            attempt.misplaced(),
            words.len()
        );
        return words.to_vec();
    }

    let guess: Vec<char> = attempt.word().chars().collect();
    with_misplaced
        .into_iter()
        .filter(|word| {
            !word
                .chars()
                .zip(guess.iter().zip(attempt.positions()))
                .any(|(w, (g, right))| !*right && w == *g)
        })
        .cloned()
        .collect()
}
