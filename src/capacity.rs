//! Slot array sizing under the fixed 0.7 load factor.

use crate::error::{AllocError, OnError};

/// Load factor numerator; the ratio is `LOAD_NUM / LOAD_DEN` = 0.7.
const LOAD_NUM: usize = 7;
const LOAD_DEN: usize = 10;

/// Smallest slot array. Keeps the mask non-trivial and leaves room for one entry.
pub(crate) const MIN_CAPACITY: usize = 2;

/// Returns the slot array length for `requested` entries.
///
/// The result is the smallest power of two `P >= MIN_CAPACITY` such that
/// `requested <= P * 0.7`.
pub(crate) const fn array_size(requested: usize, on_err: OnError) -> Result<usize, AllocError> {
    // ceil(requested / 0.7) == ceil(requested * 10 / 7)
    let scaled = match requested.checked_mul(LOAD_DEN) {
        Some(scaled) => scaled,
        None => return Err(on_err.overflow()),
    };
    let min_slots = scaled.div_ceil(LOAD_NUM);
    match min_slots.checked_next_power_of_two() {
        Some(size) if size < MIN_CAPACITY => Ok(MIN_CAPACITY),
        Some(size) => Ok(size),
        None => Err(on_err.overflow()),
    }
}

/// Returns `floor(cap * 0.7)`, the entry count that forces the next insertion to grow.
#[inline]
pub(crate) const fn size_threshold(cap: usize) -> usize {
    (cap / LOAD_DEN) * LOAD_NUM + (cap % LOAD_DEN) * LOAD_NUM / LOAD_DEN
}
