// ============================================================================
// Money Value Object
// ============================================================================

use std::fmt;

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{has_cent_granularity, parse_finite, MAX_MONEY};
use crate::numeric::{round_money, ConstraintViolation};

/// A non-negative, currency-agnostic monetary amount at cent precision.
///
/// `Money` can only be obtained through [`Money::try_new`], so holding one
/// proves the amount already passed boundary validation. Computed results are
/// produced internally via `from_computed`, which applies the crate-wide
/// rounding policy; a computed principal may exceed [`MAX_MONEY`], which is an
/// input-side bound against absurd caller data, not a type invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Money(Decimal);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validates an untrusted amount.
    ///
    /// # Errors
    /// - `NotFinite` for NaN, infinite, or unrepresentable values
    /// - `Negative` for amounts below zero
    /// - `AboveMaximum` for amounts above [`MAX_MONEY`]
    /// - `TooManyDecimals` for amounts finer than one cent
    pub fn try_new(value: f64) -> Result<Self, ConstraintViolation> {
        let amount = parse_finite(value)?;
        if amount < Decimal::ZERO {
            return Err(ConstraintViolation::Negative);
        }
        if amount > MAX_MONEY {
            return Err(ConstraintViolation::AboveMaximum);
        }
        if !has_cent_granularity(amount) {
            return Err(ConstraintViolation::TooManyDecimals);
        }
        Ok(Self(amount))
    }

    /// Wraps a computed amount, rounding it to cent precision.
    pub(crate) fn from_computed(amount: Decimal) -> Self {
        Self(round_money(amount))
    }

    /// The underlying decimal amount.
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero.
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
