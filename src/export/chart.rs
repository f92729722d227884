//! Balance decline series for plotting all frequencies on one chart

use crate::amortization::PaymentSchedule;
use crate::error::Result;
use csv::Writer;
use serde::Serialize;
use std::path::Path;

/// Chart labels for the balance decline plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl Default for BalanceChart {
    fn default() -> Self {
        Self {
            title: "Loan Balance Decline by Payment Frequency",
            x_label: "Period",
            y_label: "Ending Balance ($)",
        }
    }
}

/// Write ending balances as a wide CSV: `period` then one column per schedule
///
/// Schedules that pay off early leave blank cells for later periods.
pub fn write_balance_series(path: &Path, schedules: &[PaymentSchedule]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    let mut header = vec![BalanceChart::default().x_label.to_string()];
    header.extend(schedules.iter().map(|s| s.frequency().label().to_string()));
    writer.write_record(&header)?;

    let longest = schedules.iter().map(|s| s.len()).max().unwrap_or(0);
    for i in 0..longest {
        let mut record = vec![(i + 1).to_string()];
        for schedule in schedules {
            record.push(
                schedule
                    .rows()
                    .get(i)
                    .map(|row| format!("{:.2}", row.ending_balance))
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
