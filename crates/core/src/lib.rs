//! # sha1pow Core Algorithm
//!
//! Brute-force search for SHA-1 proof-of-work solutions.
//!
//! Given a 16-byte problem token and a difficulty `d` in `0..=32`, find a
//! 16-byte solution token such that the first 32-bit word of
//! `SHA1(problem || solution || problem)` has its top `d` bits clear.
//!
//! ## Candidate Format
//!
//! Solutions are the decimal form of a candidate index, right-aligned and
//! zero-padded to sixteen digits:
//!
//! ```text
//! buffer = problem || 0000000000000042 || problem
//!          ^^^^^^^    ^^^^^^^^^^^^^^^^    ^^^^^^^
//!          16 bytes   16 ASCII digits     16 bytes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sha1pow_core::{Difficulty, Problem, solve, verify};
//!
//! let problem: Problem = "abcdefghijklmnop".parse().unwrap();
//! let difficulty = Difficulty::saturating(8);
//!
//! let solution = solve(&problem, difficulty).unwrap();
//! assert_eq!(solution.as_str(), "0000000000000163");
//! assert!(verify(&problem, &solution, difficulty));
//! ```
//!
//! ## Parallel Search
//!
//! [`solve_parallel`] spreads the index space over one thread per core. It
//! returns *a* valid solution, not necessarily the lowest one:
//!
//! ```rust
//! use sha1pow_core::{Difficulty, Problem, SearchConfig, Solver, verify};
//!
//! let problem: Problem = "0123456789abcdef".parse().unwrap();
//! let difficulty = Difficulty::saturating(12);
//!
//! let solver = Solver::with_config(SearchConfig::default().with_threads(4));
//! let report = solver.search_parallel(&problem, difficulty).unwrap();
//! assert!(verify(&problem, &report.solution, difficulty));
//! ```

mod candidate;
mod config;
mod digest;
mod encode;
mod error;
mod mask;
mod params;
mod parallel;
mod report;
mod solve;
mod token;
mod verify;

pub use candidate::CandidateBuffer;
pub use config::SearchConfig;
pub use digest::{Digest160, Sha1Digest, sha1_bytes};
pub use encode::encode_index;
pub use error::{Error, SolveError};
pub use mask::DifficultyMask;
pub use params::*;
pub use report::SearchReport;
pub use solve::{Solver, solve, solve_parallel};
pub use token::{Difficulty, Problem, Solution};
pub use verify::{solution_digest, verify, verify_with};
