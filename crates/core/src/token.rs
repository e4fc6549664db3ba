//! Validated problem, solution and difficulty values.
//!
//! Construction is the only place input is checked; once a [`Problem`] or a
//! [`Difficulty`] exists the solvers never fail on it.

use core::fmt;
use core::str::FromStr;

use crate::encode::encode_index;
use crate::error::Error;
use crate::params::{MAX_DIFFICULTY, PROBLEM_LEN, SOLUTION_LEN};

/// A 16-byte opaque problem token
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Problem([u8; PROBLEM_LEN]);

impl Problem {
    /// Wrap an exact-length byte array
    pub const fn new(bytes: [u8; PROBLEM_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a problem from a byte slice, rejecting any other length
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; PROBLEM_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidProblemLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; PROBLEM_LEN] {
        &self.0
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// A 16-byte solution token: the zero-padded decimal form of a candidate index
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution([u8; SOLUTION_LEN]);

impl Solution {
    /// Encode `index` the same way the solvers do
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [b'0'; SOLUTION_LEN];
        encode_index(index, &mut bytes);
        Self(bytes)
    }

    pub(crate) const fn from_bytes(bytes: [u8; SOLUTION_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a solution, requiring exactly sixteen ASCII digits
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; SOLUTION_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidSolutionLength(bytes.len()))?;
        if let Some(position) = array.iter().position(|b| !b.is_ascii_digit()) {
            return Err(Error::InvalidSolutionDigit {
                position,
                byte: array[position],
            });
        }
        Ok(Self(array))
    }

    /// The candidate index this token encodes
    pub fn index(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'))
    }

    pub fn as_bytes(&self) -> &[u8; SOLUTION_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Always ASCII digits: built by `encode_index` or checked in `from_slice`
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Solution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution({})", self.as_str())
    }
}

/// Number of leading zero bits required in the first digest word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u32);

impl Difficulty {
    /// Build a difficulty, clamping anything above 32 to 32
    pub const fn saturating(bits: u32) -> Self {
        if bits > MAX_DIFFICULTY {
            Self(MAX_DIFFICULTY)
        } else {
            Self(bits)
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(bits) if bits <= MAX_DIFFICULTY => Ok(Self(bits)),
            _ => Err(Error::DifficultyOutOfRange(value)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
