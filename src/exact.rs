//! Exact evaluator.
//!
//! Accumulates in `u128`. For any `u64` bound the total stays below `2^127`
//! (`sum(n) <= n^2 / 3 + n`), so no input loses precision. This knowingly
//! differs from the double-precision experiment in [`crate::float`], which
//! drifts once the accumulator passes `2^53 - 1`.

use crate::error::SumError;
use crate::steps::steps;

/// Sum of `ceil(m / 2)^2` over the halving sequence `m = n, n/2, n/4, ...`.
///
/// Equal to the sum of the largest odd divisors of `1..=n`. `sum(0) == 0`.
#[must_use]
pub fn sum(n: u64) -> u128 {
    let total = steps(n).map(|step| step.contribution()).sum();
    #[cfg(feature = "tracing")]
    tracing::trace!(n, total = %total, "exact sum");
    total
}

/// [`sum`] for a signed bound.
///
/// # Errors
///
/// Returns [`SumError::Negative`] if `n < 0`.
pub fn checked_sum(n: i64) -> Result<u128, SumError> {
    let n = u64::try_from(n).map_err(|_| SumError::Negative(n))?;
    Ok(sum(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let got: Vec<u128> = (0..=10).map(sum).collect();
        assert_eq!(got, vec![0, 1, 2, 5, 6, 11, 14, 21, 22, 31, 36]);
    }

    #[test]
    fn one_billion_matches_known_answer() {
        assert_eq!(sum(1_000_000_000), 333_333_333_334_181_226);
    }

    #[test]
    fn hundred_million() {
        assert_eq!(sum(100_000_000), 3_333_333_333_471_362);
    }

    #[test]
    fn odd_difference_is_the_bound() {
        assert_eq!(sum(99_999_999) - sum(99_999_998), 99_999_999);
        assert_eq!(sum(999_999_999) - sum(999_999_998), 999_999_999);
    }

    #[test]
    fn max_input() {
        assert_eq!(
            sum(u64::MAX),
            113_427_455_640_312_821_154_458_202_477_256_070_485
        );
    }

    #[test]
    fn checked_rejects_negative() {
        assert_eq!(checked_sum(-1), Err(SumError::Negative(-1)));
        assert_eq!(checked_sum(i64::MIN), Err(SumError::Negative(i64::MIN)));
    }

    #[test]
    fn checked_accepts_non_negative() {
        assert_eq!(checked_sum(0), Ok(0));
        assert_eq!(checked_sum(10), Ok(36));
        assert_eq!(checked_sum(i64::MAX), Ok(sum(i64::MAX as u64)));
    }
}
