use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CalcError;

/// Unit a loan term is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    /// Term counts monthly periods
    #[default]
    Months,
    /// Term counts years of twelve periods
    Years,
}

impl TermUnit {
    /// Convert a term in this unit to a number of monthly periods.
    #[must_use]
    pub fn to_months(self, term: f64) -> f64 {
        match self {
            Self::Months => term,
            Self::Years => term * 12.0,
        }
    }
}

/// Unit a height is entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    /// Single centimetre field
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    /// Separate feet and inches fields
    #[serde(rename = "ft")]
    FeetInches,
}

/// Unit a weight is entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds
    #[serde(rename = "lb")]
    Pounds,
}

impl FromStr for TermUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "months" | "month" | "m" => Ok(Self::Months),
            "years" | "year" | "y" => Ok(Self::Years),
            other => Err(CalcError::invalid("term_unit", format!("unknown unit '{other}'"))),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" => Ok(Self::Centimeters),
            "ft" | "ft-in" => Ok(Self::FeetInches),
            other => Err(CalcError::invalid("height_unit", format!("unknown unit '{other}'"))),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kilograms),
            "lb" | "lbs" => Ok(Self::Pounds),
            other => Err(CalcError::invalid("weight_unit", format!("unknown unit '{other}'"))),
        }
    }
}

impl fmt::Display for TermUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months => write!(f, "months"),
            Self::Years => write!(f, "years"),
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centimeters => write!(f, "cm"),
            Self::FeetInches => write!(f, "ft"),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilograms => write!(f, "kg"),
            Self::Pounds => write!(f, "lb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_unit_conversion() {
        assert!((TermUnit::Years.to_months(2.5) - 30.0).abs() < f64::EPSILON);
        assert!((TermUnit::Months.to_months(18.0) - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_units_parse_case_insensitively() {
        assert_eq!("Years".parse::<TermUnit>().unwrap(), TermUnit::Years);
        assert_eq!("FT".parse::<HeightUnit>().unwrap(), HeightUnit::FeetInches);
        assert_eq!("lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);
    }

    #[test]
    fn test_unknown_unit_is_invalid_input() {
        let err = "fortnights".parse::<TermUnit>().unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid("term_unit", "unknown unit 'fortnights'")
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for unit in [HeightUnit::Centimeters, HeightUnit::FeetInches] {
            assert_eq!(unit.to_string().parse::<HeightUnit>().unwrap(), unit);
        }
    }
}
