//! Fractional count resolution.
//!
//! An expected count such as `2.6` is realized per record as `2` or `3`,
//! choosing `3` with probability `0.6`, so the mean over many records
//! converges to the expectation.

use catalog_core::ExpectedCount;
use rand::Rng;

/// Resolve `expected` into an integer count using exactly one draw from `rng`.
///
/// The draw is consumed even when the expectation has no fractional part
/// (including zero), so later draws from the same stream keep their
/// positions whatever the expectation is.
pub fn resolve_count<R: Rng + ?Sized>(expected: ExpectedCount, rng: &mut R) -> u64 {
    let draw: f64 = rng.random();
    let whole = expected.whole();
    if draw < expected.fraction() {
        whole + 1
    } else {
        whole
    }
}
