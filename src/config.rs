//! Run configuration for the schedule generator
//!
//! Values can come from a JSON file, command line flags or interactive
//! prompts. Loan inputs stay optional here so the caller can fill whatever
//! is missing before validating.

use crate::error::{AmortizationError, Result};
use crate::loan::{validate_principal, LoanTerms};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inputs and output settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Amount borrowed
    #[serde(default)]
    pub principal: Option<f64>,

    /// Quoted annual rate in percent, compounded semi-annually
    #[serde(default)]
    pub quoted_rate: Option<f64>,

    /// Years over which the loan is amortized
    #[serde(default)]
    pub amortization_years: Option<u32>,

    /// Mortgage term in years (rate renewal horizon)
    /// Reported alongside the schedule; does not shorten it
    #[serde(default)]
    pub term_years: Option<u32>,

    /// Directory receiving schedule sheets, chart series and summary
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Write exports after printing payments
    #[serde(default = "default_true")]
    pub export: bool,
}

fn default_output_dir() -> PathBuf { PathBuf::from("output") }
fn default_true() -> bool { true }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            principal: None,
            quoted_rate: None,
            amortization_years: None,
            term_years: None,
            output_dir: default_output_dir(),
            export: true,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file; absent fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AmortizationError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AmortizationError::Config(e.to_string()))
    }

    /// Overlay loan inputs present in `overrides` onto this config
    ///
    /// Export stays enabled only if both sides enable it. The output
    /// directory is left alone; set it with [`RunConfig::with_output_dir`].
    pub fn merge(mut self, overrides: RunConfig) -> Self {
        self.principal = overrides.principal.or(self.principal);
        self.quoted_rate = overrides.quoted_rate.or(self.quoted_rate);
        self.amortization_years = overrides.amortization_years.or(self.amortization_years);
        self.term_years = overrides.term_years.or(self.term_years);
        self.export = self.export && overrides.export;
        self
    }

    /// Replace the output directory when one was given explicitly
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Validated principal
    pub fn principal(&self) -> Result<f64> {
        let principal = self
            .principal
            .ok_or_else(|| AmortizationError::Config("principal is required".into()))?;
        validate_principal(principal)
    }

    /// Validated loan terms
    pub fn loan_terms(&self) -> Result<LoanTerms> {
        let rate = self
            .quoted_rate
            .ok_or_else(|| AmortizationError::Config("quoted_rate is required".into()))?;
        let years = self
            .amortization_years
            .ok_or_else(|| AmortizationError::Config("amortization_years is required".into()))?;
        LoanTerms::new(rate, years)
    }

    /// Validated term, if one was given
    pub fn term_years(&self) -> Result<Option<u32>> {
        match self.term_years {
            None => Ok(None),
            Some(0) => Err(AmortizationError::InvalidYears { years: 0 }),
            Some(term) => {
                if let Some(amortization) = self.amortization_years {
                    if term > amortization {
                        warn!(
                            "Term of {} years exceeds the {} year amortization",
                            term, amortization
                        );
                    }
                }
                Ok(Some(term))
            }
        }
    }
}
