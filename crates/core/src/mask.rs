//! Difficulty mask and match test.

use crate::params::MAX_DIFFICULTY;
use crate::token::Difficulty;

/// Bitmask with the top `difficulty` bits of a 32-bit word set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyMask(u32);

impl DifficultyMask {
    /// Mask for a validated difficulty
    pub const fn new(difficulty: Difficulty) -> Self {
        Self::from_bits(difficulty.bits())
    }

    /// Mask for `bits` leading bits; anything above 32 is treated as 32
    pub const fn from_bits(bits: u32) -> Self {
        if bits == 0 {
            Self(0)
        } else if bits >= MAX_DIFFICULTY {
            Self(u32::MAX)
        } else {
            Self(u32::MAX << (MAX_DIFFICULTY - bits))
        }
    }

    /// Raw mask bits
    pub const fn value(self) -> u32 {
        self.0
    }

    /// A digest word is accepted iff none of the masked bits are set
    #[inline(always)]
    pub const fn accepts(self, word: u32) -> bool {
        word & self.0 == 0
    }
}

impl From<Difficulty> for DifficultyMask {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty)
    }
}
