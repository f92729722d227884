//! Immutable loan terms

use crate::error::{AmortizationError, Result};
use serde::Serialize;

/// Longest amortization accepted, keeping period counts well inside `u32`
pub const MAX_AMORTIZATION_YEARS: u32 = 100;

/// Quoted rate and amortization horizon of a mortgage
///
/// The quoted rate is a nominal annual percentage compounded semi-annually
/// (e.g. 5.0 means 5%). Construct through [`LoanTerms::new`] so the rate
/// domain and horizon are checked once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    quoted_rate_percent: f64,
    amortization_years: u32,
}

impl LoanTerms {
    /// Validate and build loan terms
    ///
    /// The rate must be finite and greater than -200 so that
    /// `1 + rate / 200` stays positive. Years must be between 1 and
    /// [`MAX_AMORTIZATION_YEARS`].
    pub fn new(quoted_rate_percent: f64, amortization_years: u32) -> Result<Self> {
        if !quoted_rate_percent.is_finite() || quoted_rate_percent <= -200.0 {
            return Err(AmortizationError::InvalidRate {
                rate: quoted_rate_percent,
            });
        }
        if amortization_years == 0 || amortization_years > MAX_AMORTIZATION_YEARS {
            return Err(AmortizationError::InvalidYears {
                years: amortization_years,
            });
        }
        Ok(Self {
            quoted_rate_percent,
            amortization_years,
        })
    }

    pub fn quoted_rate_percent(&self) -> f64 {
        self.quoted_rate_percent
    }

    pub fn amortization_years(&self) -> u32 {
        self.amortization_years
    }
}

/// Reject principals the engine cannot amortize
pub fn validate_principal(principal: f64) -> Result<f64> {
    if principal.is_finite() && principal > 0.0 {
        Ok(principal)
    } else {
        Err(AmortizationError::InvalidPrincipal { principal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(5.0, 25).unwrap();
        assert_eq!(terms.quoted_rate_percent(), 5.0);
        assert_eq!(terms.amortization_years(), 25);

        // Zero and moderately negative rates are inside the domain
        assert!(LoanTerms::new(0.0, 1).is_ok());
        assert!(LoanTerms::new(-1.5, 10).is_ok());
    }

    #[test]
    fn test_rate_domain() {
        assert!(matches!(
            LoanTerms::new(-200.0, 25),
            Err(AmortizationError::InvalidRate { .. })
        ));
        assert!(LoanTerms::new(-250.0, 25).is_err());
        assert!(LoanTerms::new(f64::NAN, 25).is_err());
        assert!(LoanTerms::new(f64::INFINITY, 25).is_err());
    }

    #[test]
    fn test_zero_years_rejected() {
        assert!(matches!(
            LoanTerms::new(5.0, 0),
            Err(AmortizationError::InvalidYears { years: 0 })
        ));
    }

    #[test]
    fn test_amortization_years_capped() {
        assert!(LoanTerms::new(5.0, MAX_AMORTIZATION_YEARS).is_ok());
        assert!(matches!(
            LoanTerms::new(5.0, MAX_AMORTIZATION_YEARS + 1),
            Err(AmortizationError::InvalidYears { years: 101 })
        ));
        assert!(matches!(
            LoanTerms::new(5.0, 100_000_000),
            Err(AmortizationError::InvalidYears { .. })
        ));
    }

    #[test]
    fn test_principal_validation() {
        assert_eq!(validate_principal(300_000.0).unwrap(), 300_000.0);
        assert!(validate_principal(0.0).is_err());
        assert!(validate_principal(-1.0).is_err());
        assert!(validate_principal(f64::NAN).is_err());
    }
}
