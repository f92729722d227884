//! JSON summary of a run: inputs, payments and per-schedule totals

use super::BalanceChart;
use crate::amortization::{AmortizationEngine, PaymentSchedule};
use crate::error::Result;
use crate::loan::{LoanTerms, PaymentFrequency};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Payment and schedule outcome for one frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySummary {
    pub frequency: PaymentFrequency,
    pub payment: f64,
    pub periods: usize,
    pub total_interest: f64,
    pub total_paid: f64,
    /// Balance owed at renewal when a term was given
    pub balance_at_term: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub principal: f64,
    pub terms: LoanTerms,
    pub effective_annual_rate: f64,
    pub term_years: Option<u32>,
    pub frequencies: Vec<FrequencySummary>,
    pub chart: BalanceChart,
}

impl RunSummary {
    /// Summarize schedules built by `engine` for `principal`
    pub fn build(
        engine: &AmortizationEngine,
        principal: f64,
        term_years: Option<u32>,
        schedules: &[PaymentSchedule],
    ) -> Self {
        let payments = engine.payments(principal);
        let frequencies = schedules
            .iter()
            .map(|schedule| {
                let totals = schedule.totals();
                FrequencySummary {
                    frequency: schedule.frequency(),
                    payment: payments.get(schedule.frequency()),
                    periods: totals.periods,
                    total_interest: totals.total_interest,
                    total_paid: totals.total_paid,
                    balance_at_term: term_years.map(|t| schedule.balance_after_years(t)),
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            principal,
            terms: *engine.terms(),
            effective_annual_rate: engine.effective_annual_rate(),
            term_years,
            frequencies,
            chart: BalanceChart::default(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
