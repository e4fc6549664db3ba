//! sha1pow Solver Library
//!
//! Solves SHA-1 proof-of-work challenges over 16-byte problem tokens.
//!
//! # Overview
//!
//! A solution is a 16-digit decimal token such that the first 32-bit word of
//! `SHA1(problem || solution || problem)` has its top `difficulty` bits
//! clear. The search engine lives in the `sha1pow-core` crate, re-exported
//! here as [`algorithm`]; this crate adds the command-line request model and
//! report rendering.
//!
//! # Example
//!
//! ```rust
//! use sha1pow::args::parse_request;
//! use sha1pow::{solve, verify};
//!
//! let request = parse_request("abcdefghijklmnop", 4).unwrap();
//! let solution = solve(&request.problem, request.difficulty).unwrap();
//!
//! assert_eq!(solution.as_str(), "0000000000000011");
//! assert!(verify(&request.problem, &solution, request.difficulty));
//! ```

// Re-export the core algorithm
pub use sha1pow_core as algorithm;

pub mod args;
pub mod report;

// Convenience re-exports
pub use algorithm::{
    solve, solve_parallel, verify, Difficulty, Problem, SearchConfig, Solution, Solver,
};
