//! Solution verification.

use crate::candidate::CandidateBuffer;
use crate::digest::{Digest160, Sha1Digest};
use crate::mask::DifficultyMask;
use crate::params::DIGEST_WORDS;
use crate::token::{Difficulty, Problem, Solution};

/// Digest words of `problem || solution || problem`
pub fn solution_digest(problem: &Problem, solution: &Solution) -> [u32; DIGEST_WORDS] {
    Sha1Digest::new().digest_words(CandidateBuffer::with_solution(problem, solution).as_bytes())
}

/// Check a solution against a difficulty
///
/// # Example
///
/// ```rust
/// use sha1pow_core::{Difficulty, Problem, Solution, verify};
///
/// let problem: Problem = "abcdefghijklmnop".parse().unwrap();
/// let solution: Solution = "0000000000000163".parse().unwrap();
///
/// assert!(verify(&problem, &solution, Difficulty::saturating(8)));
/// assert!(!verify(&problem, &solution, Difficulty::saturating(12)));
/// ```
pub fn verify(problem: &Problem, solution: &Solution, difficulty: Difficulty) -> bool {
    verify_with(&mut Sha1Digest::new(), problem, solution, difficulty)
}

/// [`verify`] with a caller-provided digest
pub fn verify_with<D: Digest160>(
    digest: &mut D,
    problem: &Problem,
    solution: &Solution,
    difficulty: Difficulty,
) -> bool {
    let buffer = CandidateBuffer::with_solution(problem, solution);
    DifficultyMask::new(difficulty).accepts(digest.first_word(buffer.as_bytes()))
}
