//! Monetary conventions shared across the engine.
//!
//! Amounts are plain `f64` values with the usual two-decimal currency
//! granularity. The 0.01 tolerance below is the only defense against
//! floating-point drift, so every "is this balance resolved" decision in
//! the crate goes through [`almost_zero`].

use std::fmt;

/// Tolerance under which a remaining balance counts as resolved.
pub const EPSILON: f64 = 0.01;

/// Returns `true` if `amount` is within [`EPSILON`] of zero.
pub fn almost_zero(amount: f64) -> bool {
    amount.abs() <= EPSILON
}

/// Currency display wrapper: `$` plus exactly two decimal places.
///
/// # Examples
///
/// ```
/// use split_engine::money::Usd;
///
/// assert_eq!(Usd(12.5).to_string(), "$12.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usd(pub f64);

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
