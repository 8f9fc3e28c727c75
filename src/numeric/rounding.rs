// ============================================================================
// Monetary Rounding
// Single rounding policy shared by every calculation in the crate
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by monetary values (cent granularity, 0.01).
pub const MONEY_SCALE: u32 = 2;

/// Rounds a computed amount to cent precision.
///
/// The crate-wide policy is round-half-away-from-zero: a result landing exactly
/// on a half cent moves to the cent further from zero. All three calculations
/// share this helper so they behave identically at the half-cent boundary.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(round_money(Decimal::new(5, 3)), Decimal::new(1, 2)); // 0.005 -> 0.01
        assert_eq!(round_money(Decimal::new(-5, 3)), Decimal::new(-1, 2)); // -0.005 -> -0.01
        assert_eq!(round_money(Decimal::new(31005, 4)), Decimal::new(311, 2)); // 3.1005 -> 3.11
    }

    #[test]
    fn test_below_half_cent_rounds_down() {
        assert_eq!(round_money(Decimal::new(1049, 4)), Decimal::new(10, 2)); // 0.1049 -> 0.10
    }

    #[test]
    fn test_exact_cents_pass_through() {
        let exact = Decimal::new(518_19, 2);
        assert_eq!(round_money(exact), exact);
    }
}
