//! Letter sets used for vowel/consonant counting and for the selector's
//! tie-break order.

use crate::error::{Result, SolverError};

pub const SPANISH_VOWELS: &str = "aeiou";
pub const SPANISH_CONSONANTS: &str = "bcdfghjklmnñpqrstvwxyz";
pub const ENGLISH_VOWELS: &str = "aeiou";
pub const ENGLISH_CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Vowels and consonants of a language, each kept in configured order
/// without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from two letter strings.
    ///
    /// Letters are lowercased and de-duplicated. Both sets must be
    /// non-empty and disjoint.
    pub fn new(vowels: &str, consonants: &str) -> Result<Self> {
        let vowels = unique_letters(vowels);
        let consonants = unique_letters(consonants);

        if vowels.is_empty() || consonants.is_empty() {
            return Err(SolverError::InvalidInput(
                "alphabet needs at least one vowel and one consonant".to_string(),
            ));
        }
        if let Some(shared) = vowels.iter().find(|c| consonants.contains(c)) {
            return Err(SolverError::InvalidInput(format!(
                "letter '{shared}' is both a vowel and a consonant"
            )));
        }

        Ok(Self { vowels, consonants })
    }

    #[must_use]
    pub fn spanish() -> Self {
        Self {
            vowels: SPANISH_VOWELS.chars().collect(),
            consonants: SPANISH_CONSONANTS.chars().collect(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            vowels: ENGLISH_VOWELS.chars().collect(),
            consonants: ENGLISH_CONSONANTS.chars().collect(),
        }
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Vowels first, then consonants.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.iter().chain(self.consonants.iter()).copied()
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    pub fn count_vowels(&self, word: &str) -> usize {
        word.chars().filter(|&c| self.is_vowel(c)).count()
    }

    pub fn count_consonants(&self, word: &str) -> usize {
        word.chars().filter(|&c| self.is_consonant(c)).count()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::spanish()
    }
}

fn unique_letters(letters: &str) -> Vec<char> {
    let mut unique = Vec::new();
    for c in letters.chars().flat_map(char::to_lowercase) {
        if !c.is_whitespace() && !unique.contains(&c) {
            unique.push(c);
        }
    }
    unique
}
