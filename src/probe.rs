//! Side-by-side runs of the exact and double-precision evaluators.
//!
//! The bound is handed to [`sum_f64`] as `n as f64`, which is itself exact
//! only up to `2^53`; every bound used in practice is far below that, and
//! the drift comes from the accumulator.

use std::fmt;

use crate::divisor::largest_odd_divisor;
use crate::exact::sum;
use crate::float::sum_f64;

/// Both evaluators run on one bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub n: u64,
    pub exact: u128,
    pub float: f64,
}

impl Comparison {
    /// True if the `f64` total is exactly the integer total.
    #[must_use]
    pub fn matches(&self) -> bool {
        f64_equals_u128(self.float, self.exact)
    }

    /// `float - exact`. Saturates if the float total is out of `i128` range.
    #[must_use]
    pub fn error(&self) -> i128 {
        // exact < 2^127 for every u64 bound.
        (self.float as i128).saturating_sub(self.exact as i128)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} exact={} f64={:.0} error={}",
            self.n,
            self.exact,
            self.float,
            self.error()
        )
    }
}

/// Run both evaluators on `n`.
#[must_use]
pub fn compare(n: u64) -> Comparison {
    let cmp = Comparison {
        n,
        exact: sum(n),
        float: sum_f64(n as f64),
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(n, matches = cmp.matches(), error = %cmp.error(), "compared evaluators");
    cmp
}

/// `sum(n) - sum(n - 1)` in both evaluators, against the value it must
/// equal: the largest odd divisor of `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferenceCheck {
    pub n: u64,
    pub expected: u64,
    pub exact: u128,
    pub float: f64,
}

impl DifferenceCheck {
    #[must_use]
    pub fn holds_exact(&self) -> bool {
        self.exact == u128::from(self.expected)
    }

    #[must_use]
    pub fn holds_float(&self) -> bool {
        f64_equals_u128(self.float, u128::from(self.expected))
    }
}

/// Difference check for `n`, or `None` for `n == 0`.
#[must_use]
pub fn difference_check(n: u64) -> Option<DifferenceCheck> {
    let prev = n.checked_sub(1)?;
    Some(DifferenceCheck {
        n,
        expected: largest_odd_divisor(n),
        exact: sum(n) - sum(prev),
        float: sum_f64(n as f64) - sum_f64(prev as f64),
    })
}

fn f64_equals_u128(x: f64, y: u128) -> bool {
    // `as` saturates, so range-check before trusting the cast.
    x >= 0.0 && x.fract() == 0.0 && x < u128::MAX as f64 && x as u128 == y
}
