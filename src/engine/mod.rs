// ============================================================================
// Engine Module
// The three mortgage calculations and their composition
// ============================================================================

mod affordability;
mod annuity;
mod prequalify;

pub use affordability::{affordable_payment, maximum_affordable_payment};
pub use annuity::{
    amortized_payment, loan_principal, maximum_loan_amount, monthly_mortgage_payment,
};
pub use prequalify::{prequalify, Prequalification, PrequalificationRequest};
