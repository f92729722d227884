//! Export sinks for schedules, balance chart series and run summary

mod chart;
mod summary;
mod workbook;

pub use chart::{write_balance_series, BalanceChart};
pub use summary::{FrequencySummary, RunSummary};
pub use workbook::CsvWorkbook;

use crate::amortization::PaymentSchedule;
use crate::error::Result;
use log::info;
use std::path::{Path, PathBuf};

/// Destination that accepts one schedule per sheet
pub trait ScheduleSink {
    fn write_schedule(&mut self, schedule: &PaymentSchedule) -> Result<()>;
}

/// Files produced by [`export_run`]
#[derive(Debug, Clone)]
pub struct ExportedFiles {
    pub sheets: Vec<PathBuf>,
    pub balance_series: PathBuf,
    pub summary: PathBuf,
}

/// Write every schedule, the balance series and the summary under `dir`
pub fn export_run(dir: &Path, schedules: &[PaymentSchedule], summary: &RunSummary) -> Result<ExportedFiles> {
    let mut workbook = CsvWorkbook::create(dir.join("schedules"))?;
    for schedule in schedules {
        workbook.write_schedule(schedule)?;
    }

    let balance_series = dir.join("balance_decline.csv");
    write_balance_series(&balance_series, schedules)?;

    let summary_path = dir.join("summary.json");
    summary.write_json(&summary_path)?;

    info!(
        "Exported {} schedules, balance series and summary to {}",
        workbook.sheets().len(),
        dir.display()
    );

    Ok(ExportedFiles {
        sheets: workbook.sheets().to_vec(),
        balance_series,
        summary: summary_path,
    })
}
