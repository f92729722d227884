//! Rate conversions and the level payment formula

/// Convert a semi-annually compounded quoted rate (percent) to an effective annual rate
///
/// Canadian mortgage rates are quoted as nominal annual rates compounded
/// twice a year: `EAR = (1 + q / 200)^2 - 1`.
#[inline]
pub fn effective_annual_rate(quoted_rate_percent: f64) -> f64 {
    (1.0 + quoted_rate_percent / 200.0).powi(2) - 1.0
}

/// Periodic rate equivalent to `ear` when compounded `periods_per_year` times
///
/// Preserves annual compounding equivalence, so this is a root, not a
/// division: `r = (1 + EAR)^(1/k) - 1`.
#[inline]
pub fn periodic_rate(ear: f64, periods_per_year: u32) -> f64 {
    (1.0 + ear).powf(1.0 / periods_per_year as f64) - 1.0
}

/// Level payment that retires `principal` over `n` periods at periodic rate `r`
///
/// Annuity-immediate: `P * r / (1 - (1 + r)^-n)`. A zero rate makes the
/// formula indeterminate, so the payment falls back to straight-line `P / n`.
pub fn level_payment(principal: f64, r: f64, n: u32) -> f64 {
    if n == 0 {
        return principal;
    }
    if r == 0.0 {
        return principal / n as f64;
    }
    principal * r / (1.0 - (1.0 + r).powf(-(n as f64)))
}

/// Round a money amount to cents
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_effective_annual_rate() {
        assert_relative_eq!(effective_annual_rate(5.0), 0.050625, epsilon = 1e-12);
        assert_eq!(effective_annual_rate(0.0), 0.0);
        // 6% semi-annual → 6.09% effective
        assert_relative_eq!(effective_annual_rate(6.0), 0.0609, epsilon = 1e-12);
    }

    #[test]
    fn test_periodic_rate_compounds_back_to_ear() {
        let ear = effective_annual_rate(5.0);
        for k in [12u32, 24, 26, 52] {
            let r = periodic_rate(ear, k);
            assert_relative_eq!((1.0 + r).powi(k as i32) - 1.0, ear, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(periodic_rate(ear, 12), 0.0041239154651442, epsilon = 1e-12);
        // Root, not simple division
        assert!(periodic_rate(ear, 12) < ear / 12.0);
    }

    #[test]
    fn test_level_payment() {
        let r = periodic_rate(effective_annual_rate(5.0), 12);
        assert_abs_diff_eq!(level_payment(300_000.0, r, 300), 1744.81, epsilon = 0.005);
    }

    #[test]
    fn test_level_payment_zero_rate_is_straight_line() {
        assert_eq!(level_payment(300_000.0, 0.0, 300), 1000.0);
        assert_eq!(level_payment(1200.0, 0.0, 12), 100.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1744.8149551110466), 1744.81);
        assert_eq!(round_cents(0.004), 0.0);
        assert_eq!(round_cents(-1.236), -1.24);
    }
}
