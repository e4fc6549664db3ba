//! The 160-bit hashing primitive.
//!
//! Solvers only depend on the [`Digest160`] contract: hash a byte buffer into
//! five 32-bit words in the primitive's native word order. [`Sha1Digest`] is
//! the production implementation.

use sha1::{Digest, Sha1};

use crate::params::DIGEST_WORDS;

/// A 160-bit digest function producing native-order 32-bit words.
pub trait Digest160 {
    /// Hash `input` and return the five digest words.
    fn digest_words(&mut self, input: &[u8]) -> [u32; DIGEST_WORDS];

    /// Hash `input` and return only the first digest word.
    #[inline(always)]
    fn first_word(&mut self, input: &[u8]) -> u32 {
        self.digest_words(input)[0]
    }
}

/// SHA-1 with words taken in big-endian order (`H0..H4`).
#[derive(Clone, Default)]
pub struct Sha1Digest {
    hasher: Sha1,
}

impl Sha1Digest {
    /// Create a new SHA-1 digest
    pub fn new() -> Self {
        Self::default()
    }
}

impl Digest160 for Sha1Digest {
    #[inline(always)]
    fn digest_words(&mut self, input: &[u8]) -> [u32; DIGEST_WORDS] {
        self.hasher.update(input);
        let out = self.hasher.finalize_reset();

        let mut words = [0u32; DIGEST_WORDS];
        for (word, chunk) in words.iter_mut().zip(out.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

/// Convenience function for single-shot hashing into raw bytes
pub fn sha1_bytes(input: &[u8]) -> [u8; 4 * DIGEST_WORDS] {
    Sha1::digest(input).into()
}
