//! Runtime search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::params::{MAX_INDEX, MAX_THREADS};

/// Settings shared by the sequential and parallel solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Worker threads for the parallel solver (default: number of CPU cores)
    pub threads: Option<usize>,
    /// Exclusive upper bound of enumerated candidate indices
    pub max_index: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threads: None,
            max_index: MAX_INDEX,
        }
    }
}

impl SearchConfig {
    /// Set an explicit worker thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Lower the exclusive index bound
    pub fn with_max_index(mut self, max_index: u64) -> Self {
        self.max_index = max_index;
        self
    }

    /// Reject settings the solvers would otherwise silently clamp
    pub fn validate(&self) -> Result<(), Error> {
        match self.threads {
            Some(0) => return Err(Error::NoWorkers),
            Some(threads) if threads > MAX_THREADS => {
                return Err(Error::TooManyWorkers(threads));
            }
            _ => {}
        }
        if self.max_index > MAX_INDEX {
            return Err(Error::SearchLimitTooLarge(self.max_index));
        }
        Ok(())
    }

    /// Worker count: the configured value or detected parallelism,
    /// kept within `1..=MAX_THREADS`
    pub fn worker_count(&self) -> usize {
        self.threads
            .unwrap_or_else(num_cpus::get)
            .clamp(1, MAX_THREADS)
    }

    /// Effective index bound, never past the 16-digit space
    pub fn limit(&self) -> u64 {
        self.max_index.min(MAX_INDEX)
    }
}
