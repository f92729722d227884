//! Error types for loan validation, schedule construction and export

use thiserror::Error;

/// Errors raised by the amortization engine and its export sinks
#[derive(Debug, Error)]
pub enum AmortizationError {
    /// Frequency tag does not name one of the six supported options
    #[error("unknown payment frequency: {name}")]
    InvalidFrequency { name: String },

    /// Quoted rate must be finite and above -200%
    #[error("quoted rate {rate}% is outside the valid domain (must be > -200)")]
    InvalidRate { rate: f64 },

    /// Amortization or term years must be positive and within range
    #[error("years must be between 1 and 100, got {years}")]
    InvalidYears { years: u32 },

    /// Principal must be finite and positive
    #[error("principal must be a positive amount, got {principal}")]
    InvalidPrincipal { principal: f64 },

    /// Run configuration could not be read or is incomplete
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure writing a schedule, chart series or summary
    #[error("export failed: {0}")]
    Export(String),
}

impl From<std::io::Error> for AmortizationError {
    fn from(err: std::io::Error) -> Self {
        AmortizationError::Export(err.to_string())
    }
}

impl From<csv::Error> for AmortizationError {
    fn from(err: csv::Error) -> Self {
        AmortizationError::Export(err.to_string())
    }
}

impl From<serde_json::Error> for AmortizationError {
    fn from(err: serde_json::Error) -> Self {
        AmortizationError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AmortizationError>;
