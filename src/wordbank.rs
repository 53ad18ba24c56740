use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::info_log;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const WORDBANK_DIR: &str = "wordle-guesser";
const WORDBANK_FILE: &str = "wordbank.txt";

/// Splits `data` on any whitespace and lowercases each word.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_lowercase).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(load_wordbank_from_str(&data))
}

/// `<data dir>/wordle-guesser/wordbank.txt`, when the platform has a data dir.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(WORDBANK_DIR).join(WORDBANK_FILE))
}

/// Loads the word bank from `path` if given, else from the default path if
/// that file exists, else from the embedded list.
pub fn resolve_wordbank(path: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = path {
        info_log!("loading word bank from {}", path.display());
        return load_wordbank_from_file(path);
    }

    if let Some(default_path) = default_wordbank_path().filter(|p| p.is_file()) {
        info_log!("loading word bank from {}", default_path.display());
        return load_wordbank_from_file(default_path);
    }

    info_log!("using embedded word bank");
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}
