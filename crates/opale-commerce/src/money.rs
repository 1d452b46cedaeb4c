//! Money type for amounts in Algerian dinars.
//!
//! The shop prices everything in whole dinars (the smallest unit customers
//! actually pay in), stored as an `i64` to keep totals exact. Multi-currency
//! support is deliberately out of scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary amount in Algerian dinars.
///
/// Serializes as a bare number, matching the storage layout of prices and
/// totals in the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in dinars.
    pub dinars: i64,
}

impl Money {
    /// Create a new amount from dinars.
    pub const fn new(dinars: i64) -> Self {
        Self { dinars }
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { dinars: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.dinars == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.dinars > 0
    }

    /// Checked addition, `None` on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.dinars.checked_add(other.dinars).map(Money::new)
    }

    /// Checked multiplication by a quantity, `None` on overflow.
    pub fn try_mul(&self, factor: i64) -> Option<Money> {
        self.dinars.checked_mul(factor).map(Money::new)
    }

    /// Checked sum of an iterator of amounts, `None` on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Format as a display string (e.g., "2600 DA").
    pub fn display(&self) -> String {
        format!("{} DA", self.dinars)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.dinars + other.dinars)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.dinars * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
