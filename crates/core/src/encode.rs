//! Candidate index encoding.

use crate::params::SOLUTION_LEN;

/// Write `index` as right-aligned decimal digits, left-padded with `'0'`.
///
/// Indices with more than [`SOLUTION_LEN`] digits keep only their low
/// sixteen digits; the solvers never produce such indices.
#[inline(always)]
pub fn encode_index(index: u64, out: &mut [u8; SOLUTION_LEN]) {
    let mut rest = index;
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
}
