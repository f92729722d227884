//! Mortgage payment calculator and amortization schedule generator
//!
//! Rates are quoted the Canadian way: a nominal annual rate compounded
//! semi-annually. Payments are solved for six payment frequencies and any
//! one of them can be expanded into a period-by-period schedule.

pub mod amortization;
pub mod config;
pub mod error;
pub mod export;
pub mod loan;

pub use amortization::{AmortizationEngine, PaymentOptions, PaymentSchedule, ScheduleRow};
pub use config::RunConfig;
pub use error::{AmortizationError, Result};
pub use loan::{LoanTerms, PaymentFrequency};
