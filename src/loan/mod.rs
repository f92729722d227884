//! Loan terms and payment frequency definitions

mod frequency;
mod terms;

pub use frequency::PaymentFrequency;
pub use terms::{validate_principal, LoanTerms, MAX_AMORTIZATION_YEARS};
