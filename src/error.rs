use thiserror::Error;

/// Errors surfaced by the filtering, selection and round-loop code.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The caller broke a precondition (mismatched lengths, empty selection input, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Feedback was contradictory or the word bank does not hold the target.
    #[error("no candidates remain for the feedback received")]
    NoCandidatesRemaining,

    #[error("puzzle collaborator failed: {0}")]
    Puzzle(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
