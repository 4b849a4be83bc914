use std::collections::BTreeMap;

use crate::age::AgeEvaluator;
use crate::bmi::BmiEvaluator;
use crate::loan::LoanEvaluator;
use crate::plugin::{CalculationResult, CalculatorPlugin};
use multicalc_types::{CalcError, FormInputs};
use tracing::{debug, warn};

/// Looks calculators up by mode name (`bmi`, `loan`, `age`).
pub struct Calculator {
    modes: BTreeMap<String, Box<dyn CalculatorPlugin>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut calculator = Self { modes: BTreeMap::new() };
        calculator.register(Box::new(BmiEvaluator));
        calculator.register(Box::new(LoanEvaluator));
        calculator.register(Box::new(AgeEvaluator));
        calculator
    }

    /// Adds a mode, replacing any calculator registered under the same name.
    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        let mode = plugin.name().to_string();
        if self.modes.insert(mode.clone(), plugin).is_some() {
            debug!(mode, "replaced calculator");
        }
    }

    pub fn calculate(&self, mode: &str, inputs: &FormInputs) -> CalculationResult {
        if let Some(plugin) = self.modes.get(mode) {
            plugin.calculate(inputs)
        } else {
            warn!(mode, "calculator not found");
            Err(CalcError::UnknownCalculator(mode.to_string()))
        }
    }

    /// Registered mode names, sorted.
    pub fn modes(&self) -> Vec<&str> {
        self.modes.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::CalculationOutput;

    #[test]
    fn test_registered_modes() {
        assert_eq!(Calculator::new().modes(), vec!["age", "bmi", "loan"]);
    }

    #[test]
    fn test_dispatches_by_mode() {
        let inputs = FormInputs::new().with("height", "170").with("weight", "70");
        let output = Calculator::new().calculate("bmi", &inputs).unwrap();
        assert!(matches!(output, CalculationOutput::Bmi(_)));
    }

    struct FixedBmi;

    impl CalculatorPlugin for FixedBmi {
        fn name(&self) -> &str {
            "bmi"
        }

        fn calculate(&self, _inputs: &FormInputs) -> CalculationResult {
            BmiEvaluator.compute(200.0, 80.0).map(CalculationOutput::Bmi)
        }
    }

    #[test]
    fn test_register_replaces_existing_mode() {
        let mut calculator = Calculator::new();
        calculator.register(Box::new(FixedBmi));
        assert_eq!(calculator.modes(), vec!["age", "bmi", "loan"]);

        let Ok(CalculationOutput::Bmi(result)) = calculator.calculate("bmi", &FormInputs::new()) else {
            panic!("expected a BMI result");
        };
        assert!((result.index - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_mode() {
        let err = Calculator::new().calculate("tip", &FormInputs::new()).unwrap_err();
        assert_eq!(err, CalcError::UnknownCalculator("tip".to_string()));
    }
}
