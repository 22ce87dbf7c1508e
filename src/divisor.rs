//! Largest odd divisors, and the brute-force sum the halving recurrence
//! shortcuts.

/// `n` with every factor of two removed. `largest_odd_divisor(0) == 0`.
#[inline]
#[must_use]
pub const fn largest_odd_divisor(n: u64) -> u64 {
    if n == 0 { 0 } else { n >> n.trailing_zeros() }
}

/// Sum of [`largest_odd_divisor`] over `1..=n`, one term at a time.
///
/// Linear in `n`; only useful as a reference for [`crate::sum`].
#[must_use]
pub fn brute_force_sum(n: u64) -> u128 {
    (1..=n).map(|k| u128::from(largest_odd_divisor(k))).sum()
}
