// ============================================================================
// Annuity Calculations
// Present value and level payment of an ordinary annuity
// ============================================================================

use rust_decimal::{Decimal, MathematicalOps};

use crate::domain::{InterestRate, LoanTerm, Money};
use crate::numeric::{MortgageError, MortgageResult};

/// `(1 + i)^n` for a monthly rate `i` and a term of `n` months.
///
/// With `i <= 100% / 12` and `n <= 360` the result stays below 4e12, far
/// inside `Decimal`'s range, so the exponentiation cannot overflow once the
/// inputs have passed validation.
fn compound_growth(monthly_rate: Decimal, months: i64) -> Decimal {
    (Decimal::ONE + monthly_rate).powi(months)
}

/// Computes the maximum loan principal supportable by a monthly payment:
/// `principal = payment * ((1 + i)^n - 1) / (i * (1 + i)^n)`
/// with `i = rate / 100 / 12` and `n = years * 12`.
///
/// A payment of zero is valid and yields a principal of zero. A zero rate is
/// rejected by validation; the formula is singular there.
///
/// # Errors
/// `InvalidInput` naming the offending field when validation fails.
///
/// # Example
/// ```
/// use mortgage_engine::prelude::*;
///
/// let principal = maximum_loan_amount(3_100.0, 4.5, 10).unwrap();
/// assert_eq!(principal, Money::try_new(299_116.90).unwrap());
/// ```
pub fn maximum_loan_amount(
    monthly_payment: f64,
    interest_rate: f64,
    loan_term: u32,
) -> MortgageResult<Money> {
    let payment = Money::try_new(monthly_payment)
        .map_err(|violation| MortgageError::invalid_input("monthly_payment", violation))?;
    let rate = InterestRate::try_new(interest_rate)
        .map_err(|violation| MortgageError::invalid_input("interest", violation))?;
    let term = LoanTerm::try_new(loan_term)
        .map_err(|violation| MortgageError::invalid_input("loan_term", violation))?;

    Ok(loan_principal(payment, rate, term))
}

/// Computes the level monthly payment that amortizes a principal:
/// `payment = principal * i * (1 + i)^n / ((1 + i)^n - 1)`.
///
/// Algebraic inverse of [`maximum_loan_amount`]: feeding a principal produced
/// there back in reproduces the original payment within one cent.
///
/// # Errors
/// `InvalidInput` naming the offending field when validation fails.
pub fn monthly_mortgage_payment(
    principal_loan: f64,
    interest_rate: f64,
    loan_term: u32,
) -> MortgageResult<Money> {
    let principal = Money::try_new(principal_loan)
        .map_err(|violation| MortgageError::invalid_input("principal_loan", violation))?;
    let rate = InterestRate::try_new(interest_rate)
        .map_err(|violation| MortgageError::invalid_input("interest", violation))?;
    let term = LoanTerm::try_new(loan_term)
        .map_err(|violation| MortgageError::invalid_input("loan_term", violation))?;

    Ok(amortized_payment(principal, rate, term))
}

/// Typed variant of [`maximum_loan_amount`]. Infallible: a validated rate is
/// strictly positive, so the denominator cannot be zero.
pub fn loan_principal(payment: Money, rate: InterestRate, term: LoanTerm) -> Money {
    let i = rate.monthly_rate();
    let growth = compound_growth(i, term.months());
    Money::from_computed(payment.amount() * (growth - Decimal::ONE) / (i * growth))
}

/// Typed variant of [`monthly_mortgage_payment`].
pub fn amortized_payment(principal: Money, rate: InterestRate, term: LoanTerm) -> Money {
    let i = rate.monthly_rate();
    let growth = compound_growth(i, term.months());
    Money::from_computed(principal.amount() * i * growth / (growth - Decimal::ONE))
}
