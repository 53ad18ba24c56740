// Library interface for wordle-guesser
// The binary and the integration tests both go through these re-exports

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game_state;
pub mod logging;
pub mod solver;
pub mod wordbank;

pub use alphabet::Alphabet;
pub use error::{Result, SolverError};
pub use feedback::{
    AttemptOutcome, GuessAttempt, MisplacedLetters, PositionFeedback, PuzzleParameters, score_guess,
};
pub use filter::{filter_by_initial_requirements, refine};
pub use game_state::{DEFAULT_MAX_ATTEMPTS, GameReport, LocalPuzzle, Puzzle, play};
pub use solver::select_guess;
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, resolve_wordbank};
