//! The 48-byte candidate buffer fed to the digest.
//!
//! Layout: `problem (16) || solution (16) || problem (16)`. The problem
//! copies are written once in [`CandidateBuffer::new`] and never touched
//! again; [`CandidateBuffer::set_index`] rewrites only the middle segment.

use crate::encode::encode_index;
use crate::params::{BUFFER_LEN, PROBLEM_LEN, SOLUTION_LEN, SOLUTION_OFFSET};
use crate::token::{Problem, Solution};

#[derive(Clone)]
pub struct CandidateBuffer {
    bytes: [u8; BUFFER_LEN],
}

impl CandidateBuffer {
    /// Lay out the problem copies around an all-`'0'` solution segment
    pub fn new(problem: &Problem) -> Self {
        let mut bytes = [b'0'; BUFFER_LEN];
        bytes[..PROBLEM_LEN].copy_from_slice(problem.as_bytes());
        bytes[SOLUTION_OFFSET + SOLUTION_LEN..].copy_from_slice(problem.as_bytes());
        Self { bytes }
    }

    /// Buffer for a specific solution, used by verification
    pub fn with_solution(problem: &Problem, solution: &Solution) -> Self {
        let mut buffer = Self::new(problem);
        buffer.write_solution(solution.as_bytes());
        buffer
    }

    /// Rewrite the middle segment with the encoding of `index`
    #[inline(always)]
    pub fn set_index(&mut self, index: u64) {
        let mut digits = [b'0'; SOLUTION_LEN];
        encode_index(index, &mut digits);
        self.write_solution(&digits);
    }

    /// Copy the current middle segment out as a solution token
    pub fn solution(&self) -> Solution {
        let mut out = [0u8; SOLUTION_LEN];
        out.copy_from_slice(&self.bytes[SOLUTION_OFFSET..SOLUTION_OFFSET + SOLUTION_LEN]);
        Solution::from_bytes(out)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.bytes
    }

    #[inline(always)]
    fn write_solution(&mut self, digits: &[u8; SOLUTION_LEN]) {
        self.bytes[SOLUTION_OFFSET..SOLUTION_OFFSET + SOLUTION_LEN].copy_from_slice(digits);
    }
}
