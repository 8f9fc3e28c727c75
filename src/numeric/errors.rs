// ============================================================================
// Mortgage Errors
// Error types for input validation and affordability checks
// ============================================================================

use std::fmt;

/// A single violated constraint on one input value.
///
/// Every public calculation re-validates its own parameters, so a violation is
/// always attributed to exactly one field of exactly one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintViolation {
    /// Value is NaN, infinite, or not representable as a decimal
    NotFinite,
    /// Value is below zero where only non-negative amounts are allowed
    Negative,
    /// Value must be strictly positive (rates, ratios, loan terms)
    NotPositive,
    /// Value exceeds the documented maximum for its field
    AboveMaximum,
    /// Value is finer-grained than one cent (more than 2 decimal places)
    TooManyDecimals,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::NotFinite => write!(f, "value is not a finite number"),
            ConstraintViolation::Negative => write!(f, "value must not be negative"),
            ConstraintViolation::NotPositive => write!(f, "value must be positive"),
            ConstraintViolation::AboveMaximum => {
                write!(f, "value exceeds the allowed maximum")
            },
            ConstraintViolation::TooManyDecimals => {
                write!(f, "value has more than two decimal places")
            },
        }
    }
}

/// Errors returned by the mortgage calculations.
///
/// Validation failures are detected before any arithmetic runs; no partial
/// result is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MortgageError {
    /// A parameter failed range or granularity validation.
    ///
    /// Carries the external field name and the constraint that failed so the
    /// caller can attribute the error without parsing a message string.
    InvalidInput {
        field: &'static str,
        violation: ConstraintViolation,
    },

    /// Inputs were individually valid, but existing debt already consumes the
    /// allowed share of income (`income * dti - debt <= 0`).
    Unaffordable,
}

impl MortgageError {
    pub(crate) const fn invalid_input(
        field: &'static str,
        violation: ConstraintViolation,
    ) -> Self {
        MortgageError::InvalidInput { field, violation }
    }
}

impl fmt::Display for MortgageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MortgageError::InvalidInput { field, violation } => {
                write!(f, "invalid input `{field}`: {violation}")
            },
            MortgageError::Unaffordable => write!(
                f,
                "debt payments are too high relative to your income to qualify for a mortgage"
            ),
        }
    }
}

impl std::error::Error for MortgageError {}

/// Result type alias for mortgage calculations
pub type MortgageResult<T> = Result<T, MortgageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        assert_eq!(
            ConstraintViolation::NotFinite.to_string(),
            "value is not a finite number"
        );
        assert_eq!(
            ConstraintViolation::TooManyDecimals.to_string(),
            "value has more than two decimal places"
        );
    }

    #[test]
    fn test_invalid_input_display_names_the_field() {
        let err = MortgageError::invalid_input("interest", ConstraintViolation::NotPositive);
        assert_eq!(err.to_string(), "invalid input `interest`: value must be positive");
    }

    #[test]
    fn test_unaffordable_display() {
        assert_eq!(
            MortgageError::Unaffordable.to_string(),
            "debt payments are too high relative to your income to qualify for a mortgage"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            MortgageError::invalid_input("dti", ConstraintViolation::AboveMaximum),
            MortgageError::invalid_input("dti", ConstraintViolation::AboveMaximum),
        );
        assert_ne!(
            MortgageError::invalid_input("dti", ConstraintViolation::AboveMaximum),
            MortgageError::Unaffordable,
        );
    }
}
