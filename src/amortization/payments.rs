//! Payment amounts for all six frequencies

use crate::loan::PaymentFrequency;
use serde::Serialize;

/// Periodic payment for each frequency, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentOptions {
    pub monthly: f64,
    pub semi_monthly: f64,
    pub bi_weekly: f64,
    pub weekly: f64,
    pub rapid_bi_weekly: f64,
    pub rapid_weekly: f64,
}

impl PaymentOptions {
    /// Payment for a single frequency
    pub fn get(&self, frequency: PaymentFrequency) -> f64 {
        match frequency {
            PaymentFrequency::Monthly => self.monthly,
            PaymentFrequency::SemiMonthly => self.semi_monthly,
            PaymentFrequency::BiWeekly => self.bi_weekly,
            PaymentFrequency::Weekly => self.weekly,
            PaymentFrequency::RapidBiWeekly => self.rapid_bi_weekly,
            PaymentFrequency::RapidWeekly => self.rapid_weekly,
        }
    }

    /// (frequency, payment) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (PaymentFrequency, f64)> + '_ {
        PaymentFrequency::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Payments as a tuple in canonical order
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.monthly,
            self.semi_monthly,
            self.bi_weekly,
            self.weekly,
            self.rapid_bi_weekly,
            self.rapid_weekly,
        )
    }
}
