//! Probe arithmetic over a power-of-two slot array.
//!
//! Every index handed out here is already reduced by `mask`, which is `capacity - 1`.

use crate::key::IntKey;

/// Odd multiplier of the golden-ratio hash.
const PHI: i64 = 0x9E37_79B9;

/// Scrambles `word` so clustered integers spread over the low bits.
///
/// The multiply wraps over the 64-bit word and the shift is arithmetic.
#[inline(always)]
pub(crate) const fn mix(word: i64) -> i64 {
    let h = word.wrapping_mul(PHI);
    h ^ (h >> 16)
}

/// Returns the home slot of `key`, where its probe sequence begins.
#[inline(always)]
pub(crate) fn start<K: IntKey>(key: K, mask: usize) -> usize {
    (mix(key.to_word()) as usize) & mask
}

/// Returns the slot probed after `idx`, wrapping at the end of the array.
#[inline(always)]
pub(crate) const fn next(idx: usize, mask: usize) -> usize {
    (idx + 1) & mask
}

/// Checks whether `x` lies in the cyclic interval `(lo, hi]`.
///
/// When `lo > hi` the interval wraps past the end of the array and covers `(lo, end)` and
/// `[0, hi]`. An empty interval (`lo == hi`) contains nothing.
#[inline(always)]
pub(crate) const fn in_cyclic_range(lo: usize, x: usize, hi: usize) -> bool {
    if lo <= hi {
        lo < x && x <= hi
    } else {
        lo < x || x <= hi
    }
}
