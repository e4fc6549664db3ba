//! Solver entry points and the single-threaded search.
//!
//! Candidates are enumerated from index 0 upward; the first one whose
//! digest word passes the difficulty mask is returned. The parallel
//! search lives in [`crate::parallel`] and shares the same buffer, encoder
//! and mask.

use core::marker::PhantomData;
use std::time::Instant;

use crate::candidate::CandidateBuffer;
use crate::config::SearchConfig;
use crate::digest::{Digest160, Sha1Digest};
use crate::error::SolveError;
use crate::mask::DifficultyMask;
use crate::report::SearchReport;
use crate::token::{Difficulty, Problem, Solution};

/// Brute-force solver, generic over the digest primitive
///
/// Each search builds fresh digest state with `D::default()`, one per
/// worker, so a solver can be shared across searches.
pub struct Solver<D = Sha1Digest> {
    config: SearchConfig,
    _digest: PhantomData<fn() -> D>,
}

impl Solver<Sha1Digest> {
    /// SHA-1 solver with the default configuration
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// SHA-1 solver with a custom configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self::from_config(config)
    }
}

impl Default for Solver<Sha1Digest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest160 + Default> Solver<D> {
    /// Solver over any digest, e.g. `Solver::<MyDigest>::from_config(config)`
    pub fn from_config(config: SearchConfig) -> Self {
        Self {
            config,
            _digest: PhantomData,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search on the calling thread.
    ///
    /// Deterministic: the same problem and difficulty always produce the
    /// lowest accepted index below the configured limit.
    pub fn search(
        &self,
        problem: &Problem,
        difficulty: Difficulty,
    ) -> Result<SearchReport, SolveError> {
        let mask = DifficultyMask::new(difficulty);
        let limit = self.config.limit();
        let start = Instant::now();

        let mut digest = D::default();
        let mut buffer = CandidateBuffer::new(problem);

        log::debug!(
            "sequential search: problem={:?} difficulty={} mask={:#010x} limit={}",
            problem,
            difficulty,
            mask.value(),
            limit
        );

        for index in 0..limit {
            buffer.set_index(index);
            let words = digest.digest_words(buffer.as_bytes());

            if mask.accepts(words[0]) {
                let report = SearchReport {
                    solution: buffer.solution(),
                    digest: words,
                    hashes: index + 1,
                    threads: 1,
                    elapsed: start.elapsed(),
                };
                log::info!(
                    "found {} after {} hashes ({:.0} H/s)",
                    report.solution,
                    report.hashes,
                    report.hashrate()
                );
                return Ok(report);
            }
        }

        log::warn!("search exhausted {} candidates at difficulty {}", limit, difficulty);
        Err(SolveError::Exhausted {
            limit,
            difficulty: difficulty.bits(),
        })
    }
}

/// Solve on a single thread with SHA-1 and the full index space
pub fn solve(problem: &Problem, difficulty: Difficulty) -> Result<Solution, SolveError> {
    Solver::new()
        .search(problem, difficulty)
        .map(|report| report.solution)
}

/// Solve with one worker per CPU core
///
/// Any accepted solution may be returned, not necessarily the lowest one.
pub fn solve_parallel(problem: &Problem, difficulty: Difficulty) -> Result<Solution, SolveError> {
    Solver::new()
        .search_parallel(problem, difficulty)
        .map(|report| report.solution)
}
