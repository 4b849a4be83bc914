//! Loan Amortization Calculator
//!
//! Fixed monthly payment for a fully amortizing loan. The term may be given in
//! months or years; the conversion to monthly periods happens here, not in the
//! caller.
//!
//! Form fields: `amount`, `rate` (annual, percent), `term`, optional `term_unit`.

use multicalc_types::{CalcError, CalcResult, FormInputs, TermUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plugin::{CalculationOutput, CalculationResult, CalculatorPlugin};
use crate::validation::{ensure_non_negative, ensure_positive};

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub periodic_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub principal: f64,
    pub term_months: f64,
}

impl LoanResult {
    /// Share of the total payment that goes to interest, in percent.
    pub fn interest_share(&self) -> f64 {
        if self.total_payment > 0.0 { self.total_interest / self.total_payment * 100.0 } else { 0.0 }
    }
}

/// Monthly payment for `principal` over `periods` months at `monthly_rate`.
/// A rate too small to register falls back to straight-line repayment.
///
/// Evaluated as `P·r / (1 - (1+r)^-n)` through `ln_1p`/`exp_m1`, which stays
/// finite for rates too small to change `1 + r` and for terms long enough to
/// overflow `(1+r)^n`.
pub fn amortized_payment(principal: f64, monthly_rate: f64, periods: f64) -> f64 {
    let discount = -(-periods * monthly_rate.ln_1p()).exp_m1();
    if discount == 0.0 {
        return principal / periods;
    }
    principal * monthly_rate / discount
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoanEvaluator;

impl LoanEvaluator {
    pub fn compute(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        term: f64,
        term_unit: TermUnit,
    ) -> CalcResult<LoanResult> {
        let principal = ensure_positive("amount", principal)?;
        let annual_rate_percent = ensure_non_negative("rate", annual_rate_percent)?;
        let term_months = ensure_positive("term", term_unit.to_months(term))?;

        let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
        let periodic_payment = amortized_payment(principal, monthly_rate, term_months);
        let total_payment = periodic_payment * term_months;
        // Rounding can leave zero-rate loans a hair below zero.
        let total_interest = (total_payment - principal).max(0.0);

        if !(periodic_payment.is_finite() && total_payment.is_finite()) {
            return Err(CalcError::NonFinite);
        }

        debug!(periodic_payment, total_interest, term_months, "computed loan amortization");
        Ok(LoanResult { periodic_payment, total_interest, total_payment, principal, term_months })
    }
}

impl CalculatorPlugin for LoanEvaluator {
    fn name(&self) -> &str {
        "loan"
    }

    fn calculate(&self, inputs: &FormInputs) -> CalculationResult {
        let principal = inputs.get_f64("amount")?;
        // An empty rate field means an interest-free loan.
        let rate = inputs.get_f64_or_zero("rate")?;
        let term = inputs.get_f64("term")?;
        let term_unit = inputs.get_parsed_or("term_unit", TermUnit::Months)?;

        self.compute(principal, rate, term, term_unit).map(CalculationOutput::Loan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!((actual - expected).abs() < tolerance, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = LoanEvaluator.compute(100_000.0, 0.0, 12.0, TermUnit::Months).unwrap();
        assert_close(result.periodic_payment, 8333.33, 0.01);
        assert_close(result.total_interest, 0.0, 1e-6);
        assert_close(result.total_payment, 100_000.0, 1e-6);
    }

    #[test]
    fn test_standard_amortization() {
        let result = LoanEvaluator.compute(10_000.0, 12.0, 12.0, TermUnit::Months).unwrap();
        assert_close(result.periodic_payment, 888.49, 0.01);
        assert_close(result.total_payment, result.periodic_payment * 12.0, 1e-9);
        assert_close(result.total_interest, result.total_payment - 10_000.0, 1e-9);
    }

    #[test]
    fn test_years_are_converted_to_months() {
        let in_years = LoanEvaluator.compute(250_000.0, 6.5, 30.0, TermUnit::Years).unwrap();
        let in_months = LoanEvaluator.compute(250_000.0, 6.5, 360.0, TermUnit::Months).unwrap();
        assert_eq!(in_years, in_months);
        assert_close(in_years.periodic_payment, 1580.17, 0.01);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(LoanEvaluator.compute(0.0, 5.0, 12.0, TermUnit::Months).is_err());
        assert!(LoanEvaluator.compute(1000.0, -1.0, 12.0, TermUnit::Months).is_err());
        assert!(LoanEvaluator.compute(1000.0, 5.0, 0.0, TermUnit::Years).is_err());
        assert_eq!(
            LoanEvaluator.compute(1000.0, 5.0, -3.0, TermUnit::Months).unwrap_err(),
            CalcError::invalid("term", "must be greater than zero")
        );
    }

    #[test]
    fn test_negligible_rate_matches_straight_line() {
        let result = LoanEvaluator.compute(10_000.0, 1e-14, 12.0, TermUnit::Months).unwrap();
        assert_close(result.periodic_payment, 10_000.0 / 12.0, 1e-6);
        assert!(result.total_interest >= 0.0);
    }

    #[test]
    fn test_very_long_term_pays_interest_only() {
        let result = LoanEvaluator.compute(10_000.0, 12.0, 100_000.0, TermUnit::Months).unwrap();
        // (1+r)^-n underflows to zero, leaving P·r.
        assert_close(result.periodic_payment, 100.0, 1e-9);
        assert!(result.total_payment.is_finite());
    }

    #[test]
    fn test_interest_share() {
        let result = LoanEvaluator.compute(10_000.0, 12.0, 12.0, TermUnit::Months).unwrap();
        assert_close(result.interest_share(), 6.21, 0.01);
    }

    #[test]
    fn test_form_defaults_to_months_and_zero_rate() {
        let inputs = FormInputs::new().with("amount", "1200").with("term", "12");
        let CalculationOutput::Loan(result) = LoanEvaluator.calculate(&inputs).unwrap() else {
            panic!("expected a loan result");
        };
        assert_close(result.periodic_payment, 100.0, 1e-9);
    }
}
