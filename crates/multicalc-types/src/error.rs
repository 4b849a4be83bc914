//! Error taxonomy for every calculator mode.
//!
//! No error is fatal: evaluators hand these back as values and the adapter layer
//! decides how to render them (a neutral placeholder for invalid input, `"Error"`
//! on the arithmetic display for the rest).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the calculators.
pub type CalcResult<T> = Result<T, CalcError>;

/// Every way a calculation can fail to produce a value
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    /// Missing, non-numeric or out-of-range input field
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: String,
        /// Human readable reason
        reason: String,
    },

    /// Arithmetic division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Overflowed or NaN result
    #[error("Result is not a finite number")]
    NonFinite,

    /// Calculator lookup by mode name failed
    #[error("Calculator '{0}' not found")]
    UnknownCalculator(String),
}

impl CalcError {
    /// Shorthand for [`CalcError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field: field.into(), reason: reason.into() }
    }

    /// Stable code for structured output and logs
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::NonFinite => "NON_FINITE",
            Self::UnknownCalculator(_) => "UNKNOWN_CALCULATOR",
        }
    }

    /// `true` for input problems that should render as a neutral placeholder
    /// rather than an error state.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = CalcError::invalid("height", "must be greater than zero");
        assert_eq!(err.to_string(), "Invalid input for 'height': must be greater than zero");
        assert!(err.is_invalid_input());
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_arithmetic_errors_are_not_input_errors() {
        assert!(!CalcError::DivisionByZero.is_invalid_input());
        assert!(!CalcError::NonFinite.is_invalid_input());
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(CalcError::NonFinite).unwrap();
        assert_eq!(json["kind"], "non_finite");

        let json = serde_json::to_value(CalcError::invalid("rate", "negative")).unwrap();
        assert_eq!(json["kind"], "invalid_input");
        assert_eq!(json["field"], "rate");
    }
}
