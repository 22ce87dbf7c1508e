//! Sum of largest odd divisors by recursive halving.
//!
//! For an upper bound `n`, repeatedly halve a working value `m` (starting at
//! `n`) and accumulate `ceil(m / 2)^2` until `m` reaches zero. The total is
//! the sum of the largest odd divisors of `1..=n`: each step counts the odd
//! numbers in `1..=m`, and the even ones reduce to `1..=m/2`.
//!
//! Two evaluators are provided:
//!
//! - [`sum`] works over `u64 -> u128` and is exact for every input.
//! - [`sum_f64`] does every operation in IEEE-754 double precision and
//!   silently loses precision once the accumulator passes `2^53 - 1`.
//!   That loss is the point of the experiment and is preserved as-is.
//!
//! [`compare`] and [`difference_check`] put the two side by side.
//!
//! # Example
//!
//! ```
//! use halving_sum::{sum, sum_f64};
//!
//! assert_eq!(sum(1_000_000_000), 333_333_333_334_181_226);
//! assert_eq!(sum_f64(1e9), 333_333_333_334_181_376.0);
//! ```

#![forbid(unsafe_code)]

pub mod divisor;
pub mod error;
pub mod exact;
pub mod float;
pub mod probe;
pub mod steps;

pub use divisor::{brute_force_sum, largest_odd_divisor};
pub use error::SumError;
pub use exact::{checked_sum, sum};
pub use float::{MAX_SAFE_INTEGER, checked_sum_f64, is_safe_integer, sum_f64};
pub use probe::{Comparison, DifferenceCheck, compare, difference_check};
pub use steps::{HalvingStep, Steps, step_count, steps};
