//! Amortization engine for payment amounts and period-by-period schedules

mod engine;
mod payments;
pub mod rates;
mod schedule;

pub use engine::{build_schedule, compute_all_payments, AmortizationEngine};
pub use payments::PaymentOptions;
pub use schedule::{PaymentSchedule, ScheduleRow, ScheduleTotals};

// ============================================================================
// Payoff tolerance
// ============================================================================
// A level payment retires the loan on period n only up to floating point
// error, and that error grows with the principal. Level schedules always
// close out on period n. Rapid schedules close out once the remaining
// balance is within this fraction of the principal of the principal portion.

/// Payoff tolerance as a fraction of the original principal
pub const BALANCE_TOLERANCE: f64 = 1e-9;
