//! Errors reported by token validation and by the solvers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Problem string must be exactly 16 bytes long (got {0})")]
    InvalidProblemLength(usize),

    #[error("Solution string must be exactly 16 bytes long (got {0})")]
    InvalidSolutionLength(usize),

    #[error("Solution must consist of decimal digits only (byte {byte:#04x} at position {position})")]
    InvalidSolutionDigit { position: usize, byte: u8 },

    #[error("Difficulty must be between 0 and 32 (got {0})")]
    DifficultyOutOfRange(i64),

    #[error("Search limit {0} exceeds the 16-digit index space")]
    SearchLimitTooLarge(u64),

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Worker count must be at most 1024 (got {0})")]
    TooManyWorkers(usize),
}

/// Failure of a completed search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Every index below `limit` was tried and none met the difficulty.
    #[error("No solution found below index {limit} at difficulty {difficulty}")]
    Exhausted { limit: u64, difficulty: u32 },

    /// The OS refused to start a worker thread.
    #[error("Failed to start worker {worker} of {workers}: {reason}")]
    Spawn {
        worker: usize,
        workers: usize,
        reason: String,
    },
}
