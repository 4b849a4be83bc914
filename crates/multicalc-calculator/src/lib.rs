#![deny(warnings)]
//! The calculators behind every multicalc mode.
//!
//! This crate provides the stateful [`ArithmeticEngine`] for the basic keypad and
//! the stateless BMI, loan and age evaluators. The stateless evaluators also
//! implement [`CalculatorPlugin`] so an adapter can drive them from raw form
//! fields through the [`Calculator`] registry.

pub mod age;
pub mod arithmetic;
pub mod bmi;
pub mod calculator;
pub mod format;
pub mod keypad;
pub mod loan;
pub mod plugin;
pub mod validation;

pub use multicalc_types::{CalcError, CalcResult, FormInputs, HeightUnit, TermUnit, WeightUnit};

// Re-export calculator implementations
pub use age::{AgeEvaluator, AgeResult};
pub use arithmetic::{ArithmeticEngine, ERROR_DISPLAY, Operator};
pub use bmi::{BmiCategory, BmiEvaluator, BmiResult, Height, Weight};
pub use calculator::Calculator;
pub use format::format_result;
pub use keypad::{Key, parse_keys};
pub use loan::{LoanEvaluator, LoanResult};
pub use plugin::{CalculationOutput, CalculationResult, CalculatorPlugin};
