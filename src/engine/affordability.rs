// ============================================================================
// Affordability Calculation
// Maximum monthly payment supportable by a household's income and debt
// ============================================================================

use rust_decimal::Decimal;

use crate::domain::{DtiRatio, Money};
use crate::numeric::{MortgageError, MortgageResult};

/// Computes the maximum affordable monthly mortgage payment:
/// `income * dti - debt`, rounded to cents.
///
/// Each parameter is validated independently before any arithmetic runs.
///
/// # Errors
/// - `InvalidInput` naming the offending field when validation fails
/// - `Unaffordable` when existing debt already consumes the allowed income
///   share (`income * dti - debt <= 0`). A silent zero is deliberately not
///   returned here: downstream it is indistinguishable from a valid
///   zero-payment loan.
///
/// # Example
/// ```
/// use mortgage_engine::prelude::*;
///
/// let payment = maximum_affordable_payment(10_000.0, 500.0, 0.36).unwrap();
/// assert_eq!(payment, Money::try_new(3_100.0).unwrap());
/// ```
pub fn maximum_affordable_payment(
    monthly_income: f64,
    monthly_debt: f64,
    dti: f64,
) -> MortgageResult<Money> {
    let income = Money::try_new(monthly_income)
        .map_err(|violation| MortgageError::invalid_input("monthly_income", violation))?;
    let debt = Money::try_new(monthly_debt)
        .map_err(|violation| MortgageError::invalid_input("monthly_debt", violation))?;
    let dti = DtiRatio::try_new(dti)
        .map_err(|violation| MortgageError::invalid_input("dti", violation))?;

    affordable_payment(income, debt, dti)
}

/// Typed variant of [`maximum_affordable_payment`] for callers that already
/// hold validated values.
pub fn affordable_payment(income: Money, debt: Money, dti: DtiRatio) -> MortgageResult<Money> {
    let obligation = income.amount() * dti.ratio() - debt.amount();
    if obligation <= Decimal::ZERO {
        return Err(MortgageError::Unaffordable);
    }
    Ok(Money::from_computed(obligation))
}
