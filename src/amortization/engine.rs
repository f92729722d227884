//! Payment solving and schedule construction for a fixed set of loan terms

use super::rates::{effective_annual_rate, level_payment, periodic_rate};
use super::{PaymentOptions, PaymentSchedule, ScheduleRow, BALANCE_TOLERANCE};
use crate::error::Result;
use crate::loan::{LoanTerms, PaymentFrequency};
use log::{debug, warn};
use rayon::prelude::*;

/// Computes payments and schedules for one set of loan terms
///
/// All methods are pure; the engine only holds the validated terms.
#[derive(Debug, Clone, Copy)]
pub struct AmortizationEngine {
    terms: LoanTerms,
}

impl AmortizationEngine {
    pub fn new(terms: LoanTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Effective annual rate of the quoted semi-annual rate
    pub fn effective_annual_rate(&self) -> f64 {
        effective_annual_rate(self.terms.quoted_rate_percent())
    }

    /// Interest rate accrued each payment period
    pub fn periodic_rate(&self, frequency: PaymentFrequency) -> f64 {
        periodic_rate(self.effective_annual_rate(), frequency.periods_per_year())
    }

    /// Number of periods in the amortization horizon
    pub fn total_periods(&self, frequency: PaymentFrequency) -> u32 {
        self.terms.amortization_years() * frequency.periods_per_year()
    }

    /// Periodic payment for one frequency
    ///
    /// Rapid options take their fraction of the monthly level payment
    /// instead of solving their own annuity.
    pub fn payment(&self, principal: f64, frequency: PaymentFrequency) -> f64 {
        match frequency.monthly_fraction() {
            Some(fraction) => self.level_payment(principal, PaymentFrequency::Monthly) * fraction,
            None => self.level_payment(principal, frequency),
        }
    }

    fn level_payment(&self, principal: f64, frequency: PaymentFrequency) -> f64 {
        level_payment(
            principal,
            self.periodic_rate(frequency),
            self.total_periods(frequency),
        )
    }

    /// Payments for all six frequencies
    pub fn payments(&self, principal: f64) -> PaymentOptions {
        let monthly = self.level_payment(principal, PaymentFrequency::Monthly);
        PaymentOptions {
            monthly,
            semi_monthly: self.level_payment(principal, PaymentFrequency::SemiMonthly),
            bi_weekly: self.level_payment(principal, PaymentFrequency::BiWeekly),
            weekly: self.level_payment(principal, PaymentFrequency::Weekly),
            rapid_bi_weekly: monthly / 2.0,
            rapid_weekly: monthly / 4.0,
        }
    }

    /// Build the amortization schedule for one frequency
    ///
    /// Interest accrues at the frequency's own periodic rate. Full precision
    /// is carried between periods and only the emitted rows are rounded. The
    /// final period pays interest plus the remaining balance, so the last
    /// ending balance is exactly zero. Level schedules always close on period
    /// `n`; rapid schedules close as soon as the payment covers the balance.
    /// Iteration stops after `n + 1` periods regardless.
    pub fn schedule(&self, principal: f64, frequency: PaymentFrequency) -> PaymentSchedule {
        let r = self.periodic_rate(frequency);
        let n = self.total_periods(frequency);
        let payment = self.payment(principal, frequency);
        let payoff_tolerance = principal.abs() * BALANCE_TOLERANCE;
        let level = !frequency.is_rapid();

        let mut rows = Vec::with_capacity(n as usize + 1);
        let mut balance = principal;
        let mut period = 1u32;

        while balance > 0.0 && period <= n + 1 {
            let starting_balance = balance;
            let interest = starting_balance * r;
            let mut principal_portion = payment - interest;
            let mut period_payment = payment;

            // Final period: pay off exactly what is left
            if (level && period == n)
                || principal_portion >= starting_balance - payoff_tolerance
            {
                principal_portion = starting_balance;
                period_payment = interest + principal_portion;
            }

            let ending_balance = starting_balance - principal_portion;
            rows.push(ScheduleRow::rounded(
                period,
                starting_balance,
                interest,
                period_payment,
                ending_balance,
            ));

            balance = ending_balance;
            period += 1;
        }

        if balance > 0.0 {
            warn!(
                "{} schedule stopped at {} periods with {:.2} outstanding",
                frequency,
                rows.len(),
                balance
            );
        }

        debug!(
            "Built {} schedule: {} periods, payment {:.2}, rate {:.8}",
            frequency,
            rows.len(),
            payment,
            r
        );

        PaymentSchedule::new(frequency, rows)
    }

    /// Build a schedule from a frequency label or tag
    pub fn schedule_by_name(&self, principal: f64, name: &str) -> Result<PaymentSchedule> {
        let frequency: PaymentFrequency = name.parse()?;
        Ok(self.schedule(principal, frequency))
    }

    /// Build all six schedules in canonical order
    ///
    /// Schedules share no state, so they are built in parallel.
    pub fn all_schedules(&self, principal: f64) -> Vec<PaymentSchedule> {
        PaymentFrequency::ALL
            .par_iter()
            .map(|&frequency| self.schedule(principal, frequency))
            .collect()
    }
}

/// Payments for all six frequencies, in canonical order
pub fn compute_all_payments(principal: f64, terms: &LoanTerms) -> PaymentOptions {
    AmortizationEngine::new(*terms).payments(principal)
}

/// Amortization schedule for one frequency
pub fn build_schedule(principal: f64, terms: &LoanTerms, frequency: PaymentFrequency) -> PaymentSchedule {
    AmortizationEngine::new(*terms).schedule(principal, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmortizationError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn engine(rate: f64, years: u32) -> AmortizationEngine {
        AmortizationEngine::new(LoanTerms::new(rate, years).unwrap())
    }

    #[test]
    fn test_reference_payments() {
        // 300k at 5% quoted, 25 year amortization
        let e = engine(5.0, 25);
        assert_relative_eq!(e.effective_annual_rate(), 0.050625, epsilon = 1e-12);
        assert_abs_diff_eq!(e.periodic_rate(PaymentFrequency::Monthly), 0.0041239, epsilon = 1e-7);
        assert_eq!(e.total_periods(PaymentFrequency::Monthly), 300);

        let p = e.payments(300_000.0);
        assert_abs_diff_eq!(p.monthly, 1744.81, epsilon = 0.005);
        assert_abs_diff_eq!(p.semi_monthly, 871.51, epsilon = 0.005);
        assert_abs_diff_eq!(p.bi_weekly, 804.41, epsilon = 0.005);
        assert_abs_diff_eq!(p.weekly, 402.01, epsilon = 0.005);
    }

    #[test]
    fn test_rapid_payments_are_monthly_fractions() {
        let p = engine(5.0, 25).payments(300_000.0);
        assert_eq!(p.rapid_bi_weekly, p.monthly / 2.0);
        assert_eq!(p.rapid_weekly, p.monthly / 4.0);

        let e = engine(5.0, 25);
        assert_eq!(e.payment(300_000.0, PaymentFrequency::RapidBiWeekly), p.rapid_bi_weekly);
        assert_eq!(e.payment(300_000.0, PaymentFrequency::RapidWeekly), p.rapid_weekly);
    }

    #[test]
    fn test_payment_order() {
        let p = engine(4.2, 20).payments(250_000.0);
        let order: Vec<PaymentFrequency> = p.iter().map(|(f, _)| f).collect();
        assert_eq!(order, PaymentFrequency::ALL.to_vec());
        let (m, s, b, w, rb, rw) = p.as_tuple();
        assert_eq!([m, s, b, w, rb, rw], [
            p.monthly, p.semi_monthly, p.bi_weekly, p.weekly, p.rapid_bi_weekly, p.rapid_weekly
        ]);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let e = engine(0.0, 25);
        let p = e.payments(300_000.0);
        assert_eq!(p.monthly, 1000.0);
        assert_eq!(p.semi_monthly, 500.0);
        assert_relative_eq!(p.bi_weekly, 300_000.0 / 650.0, epsilon = 1e-12);
        assert_relative_eq!(p.weekly, 300_000.0 / 1300.0, epsilon = 1e-12);

        let schedule = e.schedule(300_000.0, PaymentFrequency::Monthly);
        assert_eq!(schedule.len(), 300);
        assert!(schedule.rows().iter().all(|r| r.interest == 0.0));
        assert_eq!(schedule.last().unwrap().ending_balance, 0.0);
    }

    #[test]
    fn test_monthly_schedule_runs_full_horizon() {
        let schedule = engine(5.0, 25).schedule(300_000.0, PaymentFrequency::Monthly);
        assert_eq!(schedule.len(), 300);

        let first = schedule.rows()[0];
        assert_eq!(first.period, 1);
        assert_eq!(first.starting_balance, 300_000.0);
        assert_abs_diff_eq!(first.interest, 1237.17, epsilon = 1e-9);
        assert_abs_diff_eq!(first.payment, 1744.81, epsilon = 1e-9);

        let last = schedule.last().unwrap();
        assert_eq!(last.period, 300);
        assert_eq!(last.ending_balance, 0.0);
    }

    #[test]
    fn test_large_principals_close_on_final_period() {
        let cases = [
            (1e9, 5.0, 25, PaymentFrequency::Monthly),
            (1e6, 25.0, 40, PaymentFrequency::BiWeekly),
            (1e7, 12.0, 40, PaymentFrequency::BiWeekly),
            (1e12, 0.5, 5, PaymentFrequency::Weekly),
        ];
        for (principal, rate, years, frequency) in cases {
            let e = engine(rate, years);
            let schedule = e.schedule(principal, frequency);
            assert_eq!(schedule.len(), e.total_periods(frequency) as usize);
            let last = schedule.last().unwrap();
            assert!(last.payment > 0.0);
            assert_eq!(last.ending_balance, 0.0);
        }
    }

    #[test]
    fn test_periods_are_sequential_and_chained() {
        let schedule = engine(5.0, 25).schedule(300_000.0, PaymentFrequency::BiWeekly);
        for (i, pair) in schedule.rows().windows(2).enumerate() {
            assert_eq!(pair[0].period, i as u32 + 1);
            assert_eq!(pair[1].period, pair[0].period + 1);
            assert_abs_diff_eq!(pair[1].starting_balance, pair[0].ending_balance, epsilon = 0.011);
        }
    }

    #[test]
    fn test_rapid_schedules_pay_off_early() {
        let e = engine(5.0, 25);
        let rapid_bw = e.schedule(300_000.0, PaymentFrequency::RapidBiWeekly);
        let rapid_w = e.schedule(300_000.0, PaymentFrequency::RapidWeekly);

        assert!(rapid_bw.len() < e.total_periods(PaymentFrequency::RapidBiWeekly) as usize);
        assert!(rapid_w.len() < e.total_periods(PaymentFrequency::RapidWeekly) as usize);
        assert_eq!(rapid_bw.last().unwrap().ending_balance, 0.0);
        assert_eq!(rapid_w.last().unwrap().ending_balance, 0.0);

        // Final row is the clamped payoff, smaller than the level amount
        let level = e.payment(300_000.0, PaymentFrequency::RapidBiWeekly);
        assert!(rapid_bw.last().unwrap().payment < level);
    }

    #[test]
    fn test_negative_rate_still_amortizes() {
        let schedule = engine(-1.0, 10).schedule(100_000.0, PaymentFrequency::Monthly);
        assert_eq!(schedule.len(), 120);
        assert!(schedule.rows()[0].interest < 0.0);
        assert_eq!(schedule.last().unwrap().ending_balance, 0.0);
    }

    #[test]
    fn test_schedule_by_name() {
        let e = engine(5.0, 25);
        let schedule = e.schedule_by_name(300_000.0, "Semi-monthly").unwrap();
        assert_eq!(schedule.frequency(), PaymentFrequency::SemiMonthly);
        assert_eq!(schedule.len(), 600);

        let err = e.schedule_by_name(300_000.0, "Quarterly").unwrap_err();
        assert!(matches!(err, AmortizationError::InvalidFrequency { .. }));
    }

    #[test]
    fn test_all_schedules_in_canonical_order() {
        let schedules = engine(5.0, 25).all_schedules(300_000.0);
        let order: Vec<PaymentFrequency> = schedules.iter().map(|s| s.frequency()).collect();
        assert_eq!(order, PaymentFrequency::ALL.to_vec());
    }

    #[test]
    fn test_free_functions_match_engine() {
        let terms = LoanTerms::new(3.5, 30).unwrap();
        let e = AmortizationEngine::new(terms);
        assert_eq!(compute_all_payments(500_000.0, &terms), e.payments(500_000.0));
        assert_eq!(
            build_schedule(500_000.0, &terms, PaymentFrequency::Weekly),
            e.schedule(500_000.0, PaymentFrequency::Weekly)
        );
    }
}
