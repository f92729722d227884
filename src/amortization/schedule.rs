//! Amortization schedule rows and aggregate views

use super::rates::round_cents;
use crate::loan::PaymentFrequency;
use serde::{Deserialize, Serialize};

/// One payment period of a schedule, money fields rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub starting_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

impl ScheduleRow {
    /// Build a display row from full-precision period values
    pub(crate) fn rounded(
        period: u32,
        starting_balance: f64,
        interest: f64,
        payment: f64,
        ending_balance: f64,
    ) -> Self {
        Self {
            period,
            starting_balance: round_cents(starting_balance),
            interest: round_cents(interest),
            payment: round_cents(payment),
            ending_balance: round_cents(ending_balance),
        }
    }

    /// Portion of the payment that reduced the balance
    pub fn principal_paid(&self) -> f64 {
        self.payment - self.interest
    }
}

/// Summed columns of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleTotals {
    pub periods: usize,
    pub total_interest: f64,
    pub total_paid: f64,
}

/// Ordered period rows for one payment frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSchedule {
    frequency: PaymentFrequency,
    rows: Vec<ScheduleRow>,
}

impl PaymentSchedule {
    pub(crate) fn new(frequency: PaymentFrequency, rows: Vec<ScheduleRow>) -> Self {
        Self { frequency, rows }
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }

    /// Ending balance per period, the series plotted for balance decline
    pub fn ending_balances(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.ending_balance).collect()
    }

    /// Sum the interest and payment columns
    pub fn totals(&self) -> ScheduleTotals {
        let (total_interest, total_paid) = self
            .rows
            .iter()
            .fold((0.0, 0.0), |(i, p), row| (i + row.interest, p + row.payment));
        ScheduleTotals {
            periods: self.rows.len(),
            total_interest: round_cents(total_interest),
            total_paid: round_cents(total_paid),
        }
    }

    /// Balance outstanding after `years` of payments
    ///
    /// This is the renewal balance at the end of a mortgage term. Returns 0
    /// once the schedule has already paid the loan off.
    pub fn balance_after_years(&self, years: u32) -> f64 {
        let periods = years as usize * self.frequency.periods_per_year() as usize;
        match periods {
            0 => self.rows.first().map(|r| r.starting_balance).unwrap_or(0.0),
            p if p >= self.rows.len() => 0.0,
            p => self.rows[p - 1].ending_balance,
        }
    }
}
