// ============================================================================
// Prequalification
// Composition of the three calculations into one request/response operation
// ============================================================================

use crate::domain::{DtiRatio, InterestRate, LoanTerm, Money};
use crate::engine::{affordable_payment, amortized_payment, loan_principal};
use crate::numeric::{MortgageError, MortgageResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw, untrusted input for a prequalification request.
///
/// Field names follow the external query contract. `dti` may be omitted, in
/// which case [`DtiRatio::DEFAULT`] applies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrequalificationRequest {
    pub monthly_income: f64,
    pub monthly_debt: f64,
    /// Nominal annual interest rate, in percent
    pub interest: f64,
    /// Loan term, in years
    pub loan_term: u32,
    /// Debt-to-income ratio; defaults to 0.36 when omitted
    pub dti: Option<f64>,
}

/// Result of a prequalification: the maximum supportable loan and the monthly
/// principal-and-interest payment that amortizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Prequalification {
    pub maximum_loan: Money,
    pub monthly_mortgage: Money,
}

/// Runs the full prequalification flow: validate every field once, derive the
/// affordable payment, the maximum principal it supports, and the monthly
/// payment that amortizes that (rounded) principal.
///
/// # Errors
/// - `InvalidInput` naming the first field that fails validation
/// - `Unaffordable` when debt already consumes the allowed income share
pub fn prequalify(request: &PrequalificationRequest) -> MortgageResult<Prequalification> {
    let income = Money::try_new(request.monthly_income)
        .map_err(|violation| MortgageError::invalid_input("monthly_income", violation))?;
    let debt = Money::try_new(request.monthly_debt)
        .map_err(|violation| MortgageError::invalid_input("monthly_debt", violation))?;
    let rate = InterestRate::try_new(request.interest)
        .map_err(|violation| MortgageError::invalid_input("interest", violation))?;
    let term = LoanTerm::try_new(request.loan_term)
        .map_err(|violation| MortgageError::invalid_input("loan_term", violation))?;
    let dti = match request.dti {
        Some(ratio) => DtiRatio::try_new(ratio)
            .map_err(|violation| MortgageError::invalid_input("dti", violation))?,
        None => DtiRatio::DEFAULT,
    };

    let affordable = affordable_payment(income, debt, dti)?;
    let maximum_loan = loan_principal(affordable, rate, term);
    let monthly_mortgage = amortized_payment(maximum_loan, rate, term);

    tracing::debug!(%affordable, %maximum_loan, %monthly_mortgage, "prequalification computed");

    Ok(Prequalification {
        maximum_loan,
        monthly_mortgage,
    })
}
