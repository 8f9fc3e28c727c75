// ============================================================================
// Numeric Module
// Numeric policy for the mortgage calculations
// ============================================================================
//
// This module provides:
// - MortgageError / ConstraintViolation: validation and affordability errors
// - round_money: the single 2-decimal-place rounding policy
//
// Design principles:
// - All arithmetic runs on rust_decimal::Decimal, never on floats
// - Every error is detected at the validation boundary, before computation
// - One rounding strategy (half away from zero) for every result

mod errors;
mod rounding;

pub use errors::{ConstraintViolation, MortgageError, MortgageResult};
pub use rounding::MONEY_SCALE;

pub(crate) use rounding::round_money;
