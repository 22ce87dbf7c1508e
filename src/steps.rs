//! The halving recurrence as an iterator.
//!
//! Each [`HalvingStep`] is one loop iteration: the current working value and
//! its rounded-up half. The working value for the next step is
//! `floor(working / 2)`, so a bound `n >= 1` yields exactly
//! `floor(log2(n)) + 1` steps.

use std::iter::FusedIterator;

/// One iteration of the halving loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalvingStep {
    /// Working value at the start of the iteration. Always `> 0`.
    pub working: u64,
    /// `ceil(working / 2)`, the number of odd integers in `1..=working`.
    pub half: u64,
}

impl HalvingStep {
    /// Amount this step adds to the accumulator: `half^2`.
    #[inline]
    #[must_use]
    pub const fn contribution(self) -> u128 {
        let half = self.half as u128;
        half * half
    }
}

/// Iterator over the steps of the halving loop for one upper bound.
#[derive(Debug, Clone)]
pub struct Steps {
    working: u64,
}

impl Iterator for Steps {
    type Item = HalvingStep;

    #[inline]
    fn next(&mut self) -> Option<HalvingStep> {
        if self.working == 0 {
            return None;
        }
        let working = self.working;
        // div_ceil instead of (m + 1) / 2: m may be u64::MAX.
        let step = HalvingStep {
            working,
            half: working.div_ceil(2),
        };
        self.working = working / 2;
        Some(step)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = step_count(self.working) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

/// Steps of the halving loop starting from `n`.
#[must_use]
pub const fn steps(n: u64) -> Steps {
    Steps { working: n }
}

/// Number of loop iterations for bound `n`: its bit length.
#[inline]
#[must_use]
pub const fn step_count(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}
