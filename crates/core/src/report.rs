//! Outcome of a successful search.

use core::time::Duration;

use crate::params::DIGEST_WORDS;
use crate::token::Solution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The accepted solution token
    pub solution: Solution,
    /// Digest words of `problem || solution || problem`
    pub digest: [u32; DIGEST_WORDS],
    /// Digests computed across all workers, including discarded ones
    pub hashes: u64,
    /// Number of workers that took part
    pub threads: usize,
    /// Wall-clock time from start until every worker joined
    pub elapsed: Duration,
}

impl SearchReport {
    /// Candidate index of the solution
    pub fn index(&self) -> u64 {
        self.solution.index()
    }

    /// Digest bytes in big-endian word order
    pub fn digest_bytes(&self) -> [u8; 4 * DIGEST_WORDS] {
        let mut bytes = [0u8; 4 * DIGEST_WORDS];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.digest) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Hashes per second over the whole search
    pub fn hashrate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.hashes as f64 / secs
        } else {
            0.0
        }
    }
}
