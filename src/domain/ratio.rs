// ============================================================================
// Debt-to-Income Ratio Value Object
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{has_cent_granularity, parse_finite};
use crate::numeric::ConstraintViolation;

/// Debt-to-income ratio: the fraction of gross monthly income permitted toward
/// total debt obligations. Valid range is `(0, 1]` at 0.01 granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DtiRatio(Decimal);

impl DtiRatio {
    /// Conventional default ratio (36%) applied when a caller omits the DTI.
    pub const DEFAULT: Self = Self(Decimal::from_parts(36, 0, 0, false, 2));

    /// Validates an untrusted ratio.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinite values
    /// - `NotPositive` for ratios of zero or below
    /// - `AboveMaximum` for ratios above 1
    /// - `TooManyDecimals` for ratios finer than 0.01
    pub fn try_new(ratio: f64) -> Result<Self, ConstraintViolation> {
        let ratio = parse_finite(ratio)?;
        if ratio <= Decimal::ZERO {
            return Err(ConstraintViolation::NotPositive);
        }
        if ratio > Decimal::ONE {
            return Err(ConstraintViolation::AboveMaximum);
        }
        if !has_cent_granularity(ratio) {
            return Err(ConstraintViolation::TooManyDecimals);
        }
        Ok(Self(ratio))
    }

    /// The ratio as a decimal fraction.
    pub fn ratio(self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_36_percent() {
        assert_eq!(DtiRatio::DEFAULT.ratio(), Decimal::new(36, 2));
    }

    #[test]
    fn test_try_new_accepts_unit_interval() {
        assert_eq!(DtiRatio::try_new(0.36).unwrap(), DtiRatio::DEFAULT);
        assert_eq!(DtiRatio::try_new(0.01).unwrap().ratio(), Decimal::new(1, 2));
        assert_eq!(DtiRatio::try_new(1.0).unwrap().ratio(), Decimal::ONE);
    }

    #[test]
    fn test_try_new_rejects_zero_and_negative() {
        assert_eq!(DtiRatio::try_new(0.0), Err(ConstraintViolation::NotPositive));
        assert_eq!(
            DtiRatio::try_new(-0.36),
            Err(ConstraintViolation::NotPositive)
        );
    }

    #[test]
    fn test_try_new_rejects_above_one() {
        // A percent value passed where a fraction is expected.
        assert_eq!(
            DtiRatio::try_new(36.0),
            Err(ConstraintViolation::AboveMaximum)
        );
        assert_eq!(
            DtiRatio::try_new(1.01),
            Err(ConstraintViolation::AboveMaximum)
        );
    }

    #[test]
    fn test_try_new_rejects_sub_cent_precision() {
        assert_eq!(
            DtiRatio::try_new(0.365),
            Err(ConstraintViolation::TooManyDecimals)
        );
    }
}
