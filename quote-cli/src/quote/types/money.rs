//! Currency amounts in whole units

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

use super::QuoteError;

/// An amount of money in whole currency units (the price table has no cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(units: u64) -> Self {
        Money(units)
    }

    pub fn units(self) -> u64 {
        self.0
    }

    /// Multiply a unit price by a quantity, failing instead of wrapping
    pub fn times(self, quantity: u32) -> Result<Money, QuoteError> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Money)
            .ok_or(QuoteError::Overflow)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Value as written to a spreadsheet cell
    pub fn as_f64(self) -> f64 {
        self.units() as f64
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
