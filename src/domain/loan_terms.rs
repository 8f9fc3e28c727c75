// ============================================================================
// Interest Rate and Loan Term Value Objects
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{has_cent_granularity, parse_finite, MAX_INTEREST_PERCENT, MAX_LOAN_TERM_YEARS};
use crate::numeric::ConstraintViolation;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Nominal annual interest rate, in percent.
///
/// A zero rate is rejected here rather than special-cased downstream: the
/// annuity formulas divide by the monthly rate, so `> 0` is part of the input
/// domain, not an arithmetic edge to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InterestRate(Decimal);

impl InterestRate {
    /// Validates an untrusted annual rate in percent.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinite values
    /// - `NotPositive` for rates of zero or below
    /// - `AboveMaximum` for rates above [`MAX_INTEREST_PERCENT`]
    /// - `TooManyDecimals` for rates finer than 0.01
    pub fn try_new(percent: f64) -> Result<Self, ConstraintViolation> {
        let percent = parse_finite(percent)?;
        if percent <= Decimal::ZERO {
            return Err(ConstraintViolation::NotPositive);
        }
        if percent > MAX_INTEREST_PERCENT {
            return Err(ConstraintViolation::AboveMaximum);
        }
        if !has_cent_granularity(percent) {
            return Err(ConstraintViolation::TooManyDecimals);
        }
        Ok(Self(percent))
    }

    /// The annual rate in percent, as validated.
    pub fn annual_percent(self) -> Decimal {
        self.0
    }

    /// The monthly rate as a decimal fraction: `percent / 100 / 12`.
    pub fn monthly_rate(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR
    }
}

/// Loan term as a whole number of years.
///
/// Backing the term with `u32` makes fractional and negative terms
/// unrepresentable; only the `1..=MAX_LOAN_TERM_YEARS` range check remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LoanTerm(u32);

impl LoanTerm {
    /// Validates an untrusted term in years.
    ///
    /// # Errors
    /// - `NotPositive` for a zero term
    /// - `AboveMaximum` for terms above [`MAX_LOAN_TERM_YEARS`]
    pub fn try_new(years: u32) -> Result<Self, ConstraintViolation> {
        if years == 0 {
            return Err(ConstraintViolation::NotPositive);
        }
        if years > MAX_LOAN_TERM_YEARS {
            return Err(ConstraintViolation::AboveMaximum);
        }
        Ok(Self(years))
    }

    /// The term in years.
    pub fn years(self) -> u32 {
        self.0
    }

    /// The term in months, as the annuity formulas consume it.
    pub fn months(self) -> i64 {
        i64::from(self.0) * 12
    }
}
