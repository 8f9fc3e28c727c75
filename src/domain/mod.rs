// ============================================================================
// Domain Module
// Validated value objects for the mortgage calculations
// ============================================================================
//
// Every public calculation treats its call boundary as a trust boundary: raw
// scalars are parsed into these value objects before any arithmetic runs, so
// the formulas never see a negative amount, a zero rate, or a sub-cent value.

mod loan_terms;
mod money;
mod ratio;

pub use loan_terms::{InterestRate, LoanTerm};
pub use money::Money;
pub use ratio::DtiRatio;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::numeric::{ConstraintViolation, MONEY_SCALE};

/// Upper bound for caller-supplied monetary amounts (income, debt, payments).
pub const MAX_MONEY: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Upper bound for the nominal annual interest rate, in percent.
pub const MAX_INTEREST_PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Upper bound for the loan term, in years.
pub const MAX_LOAN_TERM_YEARS: u32 = 30;

/// Parses an untrusted float into a decimal, rejecting NaN, infinities, and
/// values outside the representable decimal range.
pub(crate) fn parse_finite(value: f64) -> Result<Decimal, ConstraintViolation> {
    if !value.is_finite() {
        return Err(ConstraintViolation::NotFinite);
    }
    Decimal::from_f64(value).ok_or(ConstraintViolation::NotFinite)
}

/// True when the value is an exact multiple of 0.01.
pub(crate) fn has_cent_granularity(value: Decimal) -> bool {
    value.normalize().scale() <= MONEY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite_rejects_nan_and_infinity() {
        assert_eq!(parse_finite(f64::NAN), Err(ConstraintViolation::NotFinite));
        assert_eq!(
            parse_finite(f64::INFINITY),
            Err(ConstraintViolation::NotFinite)
        );
        assert_eq!(
            parse_finite(f64::NEG_INFINITY),
            Err(ConstraintViolation::NotFinite)
        );
    }

    #[test]
    fn test_parse_finite_recovers_cent_values() {
        assert_eq!(parse_finite(4.5), Ok(Decimal::new(45, 1)));
        assert_eq!(parse_finite(299_116.9), Ok(Decimal::new(2_991_169, 1)));
    }

    #[test]
    fn test_cent_granularity() {
        assert!(has_cent_granularity(Decimal::new(10_000, 0)));
        assert!(has_cent_granularity(Decimal::new(3_100_00, 2)));
        assert!(has_cent_granularity(Decimal::new(3_100_10, 2)));
        assert!(!has_cent_granularity(Decimal::new(3_100_105, 3)));
    }
}
