//! Double-precision evaluator.
//!
//! Every operation here is an IEEE-754 `f64` operation, so the result is only
//! trustworthy while the accumulator stays at or below [`MAX_SAFE_INTEGER`].
//! Past that point additions round silently and the total drifts from
//! [`crate::sum`]. Nothing here corrects the drift.

use crate::error::SumError;

/// Largest integer `x` such that `x` and `x + 1` are both exact in `f64`:
/// `2^53 - 1`.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The halving sum computed entirely in `f64`.
///
/// Loops while `m > 0`, adding `floor((m + 1) / 2)^2` and setting
/// `m = floor(m / 2)`, then floors the total. Zero, negative, and NaN bounds
/// never enter the loop and give `0.0`. Positive infinity gives
/// `f64::INFINITY`, since halving it never reaches zero.
#[must_use]
pub fn sum_f64(n: f64) -> f64 {
    if n == f64::INFINITY {
        return f64::INFINITY;
    }
    let mut ret = 0.0_f64;
    let mut m = n;
    while m > 0.0 {
        let half = ((m + 1.0) / 2.0).floor();
        ret += half * half;
        m = (m / 2.0).floor();
    }
    #[cfg(feature = "tracing")]
    if ret > MAX_SAFE_INTEGER {
        tracing::debug!(n, ret, "f64 accumulator exceeded MAX_SAFE_INTEGER");
    }
    ret.floor()
}

/// [`sum_f64`] restricted to non-negative finite integers.
///
/// # Errors
///
/// Returns [`SumError::NegativeFloat`] for `n < 0` and
/// [`SumError::NotAnInteger`] for NaN, infinite, or fractional `n`.
pub fn checked_sum_f64(n: f64) -> Result<f64, SumError> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(SumError::NotAnInteger(n));
    }
    if n < 0.0 {
        return Err(SumError::NegativeFloat(n));
    }
    Ok(sum_f64(n))
}

/// Whether `x` is an integer that `f64` represents without ambiguity.
#[must_use]
pub fn is_safe_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0 && x.abs() <= MAX_SAFE_INTEGER
}
