//! Errors returned by the checked entry points.

use std::fmt;

/// Input rejected by [`checked_sum`](crate::checked_sum) or
/// [`checked_sum_f64`](crate::checked_sum_f64).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SumError {
    /// Signed integer input below zero.
    Negative(i64),
    /// Float input below zero.
    NegativeFloat(f64),
    /// Float input that is NaN, infinite, or has a fractional part.
    NotAnInteger(f64),
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(n) => write!(f, "upper bound must be non-negative, got {n}"),
            Self::NegativeFloat(n) => write!(f, "upper bound must be non-negative, got {n}"),
            Self::NotAnInteger(n) => write!(f, "upper bound must be a finite integer, got {n}"),
        }
    }
}

impl std::error::Error for SumError {}
