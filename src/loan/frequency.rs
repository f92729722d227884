//! Payment frequency options offered on a Canadian mortgage

use crate::error::AmortizationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum worksheet name length accepted by spreadsheet tools
const MAX_SHEET_NAME_LEN: usize = 31;

/// How often a mortgage payment is made
///
/// The four level options solve their own annuity payment. The two rapid
/// options reuse a fraction of the monthly payment and pay it more often,
/// which retires the loan ahead of the amortization horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    #[serde(rename = "Monthly")]
    Monthly,
    #[serde(rename = "Semi-monthly")]
    SemiMonthly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    #[serde(rename = "Weekly")]
    Weekly,
    #[serde(rename = "Rapid Bi-weekly")]
    RapidBiWeekly,
    #[serde(rename = "Rapid Weekly")]
    RapidWeekly,
}

impl PaymentFrequency {
    /// All options in canonical reporting order
    pub const ALL: [PaymentFrequency; 6] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
        PaymentFrequency::RapidBiWeekly,
        PaymentFrequency::RapidWeekly,
    ];

    /// Payments made per year, which also sets the interest accrual period
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly | PaymentFrequency::RapidBiWeekly => 26,
            PaymentFrequency::Weekly | PaymentFrequency::RapidWeekly => 52,
        }
    }

    /// Share of the monthly payment paid each period for rapid options
    ///
    /// `None` for level options, whose payment comes from the annuity formula.
    pub fn monthly_fraction(&self) -> Option<f64> {
        match self {
            PaymentFrequency::RapidBiWeekly => Some(0.5),
            PaymentFrequency::RapidWeekly => Some(0.25),
            _ => None,
        }
    }

    pub fn is_rapid(&self) -> bool {
        self.monthly_fraction().is_some()
    }

    /// Label used in printed output and exports
    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::SemiMonthly => "Semi-monthly",
            PaymentFrequency::BiWeekly => "Bi-weekly",
            PaymentFrequency::Weekly => "Weekly",
            PaymentFrequency::RapidBiWeekly => "Rapid Bi-weekly",
            PaymentFrequency::RapidWeekly => "Rapid Weekly",
        }
    }

    /// Worksheet-safe name: spaces become underscores, capped at 31 chars
    pub fn sheet_name(&self) -> String {
        self.label()
            .replace(' ', "_")
            .chars()
            .take(MAX_SHEET_NAME_LEN)
            .collect()
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaymentFrequency {
    type Err = AmortizationError;

    /// Parse a label, sheet name or compact tag, ignoring case and separators
    ///
    /// "Rapid Bi-weekly", "Rapid_Bi-weekly" and "rapid-biweekly" all resolve to
    /// the same option.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "semimonthly" => Ok(PaymentFrequency::SemiMonthly),
            "biweekly" => Ok(PaymentFrequency::BiWeekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            "rapidbiweekly" => Ok(PaymentFrequency::RapidBiWeekly),
            "rapidweekly" => Ok(PaymentFrequency::RapidWeekly),
            _ => Err(AmortizationError::InvalidFrequency {
                name: s.to_string(),
            }),
        }
    }
}
