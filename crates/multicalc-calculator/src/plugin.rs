use multicalc_types::{CalcError, FormInputs};
use serde::{Deserialize, Serialize};

use crate::age::AgeResult;
use crate::bmi::BmiResult;
use crate::loan::LoanResult;

pub type CalculationResult = Result<CalculationOutput, CalcError>;

/// Result of any form-driven calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculationOutput {
    Bmi(BmiResult),
    Loan(LoanResult),
    Age(AgeResult),
}

/// A trait for form-driven calculator plugins.
pub trait CalculatorPlugin: Send + Sync {
    /// The mode name the calculator is registered under.
    fn name(&self) -> &str;

    /// Reads the raw form fields and performs the calculation.
    fn calculate(&self, inputs: &FormInputs) -> CalculationResult;
}
