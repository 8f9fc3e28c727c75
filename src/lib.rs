// ============================================================================
// Mortgage Engine Library
// Validated, decimal-exact mortgage affordability calculations
// ============================================================================

//! # Mortgage Engine
//!
//! A small, synchronous library computing mortgage affordability figures from
//! a household's income, debt, an acceptable debt-to-income ratio, a loan
//! term, and an interest rate.
//!
//! ## Features
//!
//! - **Validated inputs** — raw scalars are parsed into value objects
//!   ([`domain::Money`], [`domain::InterestRate`], [`domain::LoanTerm`],
//!   [`domain::DtiRatio`]) before any arithmetic runs
//! - **Decimal-exact arithmetic** — every formula runs on `rust_decimal`, with
//!   one shared rounding policy (half away from zero, cent precision)
//! - **No state, no I/O** — each call validates, computes, and returns; the
//!   library is thread-agnostic and free to call concurrently
//!
//! ## Example
//!
//! ```rust
//! use mortgage_engine::prelude::*;
//!
//! // How much can the household put toward a mortgage each month?
//! let payment = maximum_affordable_payment(10_000.0, 500.0, 0.36).unwrap();
//! assert_eq!(payment, Money::try_new(3_100.0).unwrap());
//!
//! // Or run the whole flow in one request.
//! let result = prequalify(&PrequalificationRequest {
//!     monthly_income: 10_000.0,
//!     monthly_debt: 500.0,
//!     interest: 4.5,
//!     loan_term: 10,
//!     dti: None, // defaults to 0.36
//! })
//! .unwrap();
//!
//! assert_eq!(result.maximum_loan, Money::try_new(299_116.90).unwrap());
//! assert_eq!(result.monthly_mortgage, Money::try_new(3_100.00).unwrap());
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DtiRatio, InterestRate, LoanTerm, Money, MAX_INTEREST_PERCENT, MAX_LOAN_TERM_YEARS,
        MAX_MONEY,
    };
    pub use crate::engine::{
        affordable_payment, amortized_payment, loan_principal, maximum_affordable_payment,
        maximum_loan_amount, monthly_mortgage_payment, prequalify, Prequalification,
        PrequalificationRequest,
    };
    pub use crate::numeric::{ConstraintViolation, MortgageError, MortgageResult, MONEY_SCALE};
}
