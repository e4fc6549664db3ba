//! sha1pow Search Parameters
//!
//! Fixed sizes of the tokens and buffer fed to the digest, and the bounds
//! of the difficulty and index spaces.

/// Problem token length in bytes
pub const PROBLEM_LEN: usize = 16;

/// Solution token length in bytes (decimal digits of the candidate index)
pub const SOLUTION_LEN: usize = 16;

/// Candidate buffer length: `problem || solution || problem`
pub const BUFFER_LEN: usize = 2 * PROBLEM_LEN + SOLUTION_LEN;

/// Offset of the solution segment inside the candidate buffer
pub const SOLUTION_OFFSET: usize = PROBLEM_LEN;

/// Highest supported difficulty (the whole first digest word)
pub const MAX_DIFFICULTY: u32 = 32;

/// Exclusive upper bound of the candidate index space (10^16).
///
/// Every index below this bound has at most [`SOLUTION_LEN`] decimal digits.
pub const MAX_INDEX: u64 = 10_000_000_000_000_000;

/// Digest output size in 32-bit words (160 bits)
pub const DIGEST_WORDS: usize = 5;

/// Upper bound on parallel worker threads
pub const MAX_THREADS: usize = 1024;
