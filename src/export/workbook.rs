//! Directory of CSV sheets, one per payment frequency

use super::ScheduleSink;
use crate::amortization::PaymentSchedule;
use crate::error::Result;
use csv::Writer;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Writes each schedule to `<dir>/<sheet name>.csv`
#[derive(Debug)]
pub struct CsvWorkbook {
    dir: PathBuf,
    sheets: Vec<PathBuf>,
}

impl CsvWorkbook {
    /// Create the workbook directory if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            sheets: Vec::new(),
        })
    }

    /// Sheet files written so far, in write order
    pub fn sheets(&self) -> &[PathBuf] {
        &self.sheets
    }
}

impl ScheduleSink for CsvWorkbook {
    fn write_schedule(&mut self, schedule: &PaymentSchedule) -> Result<()> {
        let path = self
            .dir
            .join(format!("{}.csv", schedule.frequency().sheet_name()));

        let mut writer = Writer::from_path(&path)?;
        for row in schedule.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", schedule.len(), path.display());
        self.sheets.push(path);
        Ok(())
    }
}
