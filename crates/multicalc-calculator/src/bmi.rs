//! Body mass index calculator
//!
//! Form fields:
//!   * `height_unit`: `cm` (default, reads `height`) | `ft` (reads `feet` and `inches`)
//!   * `weight` with `weight_unit`: `kg` (default) | `lb`

use multicalc_types::{CalcError, CalcResult, FormInputs, HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plugin::{CalculationOutput, CalculationResult, CalculatorPlugin};
use crate::validation::ensure_positive;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

const CM_PER_INCH: f64 = 2.54;
const INCHES_PER_FOOT: f64 = 12.0;
const KG_PER_POUND: f64 = 0.453_592;

/// Width of each category band on the indicator scale
const BAND_WIDTH: f64 = 25.0;
/// Index span above [`OBESE_FROM`] that fills the last band
const OBESE_SPAN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open bands: `[18.5, 25)` is normal, `[25, 30)` overweight.
    pub fn from_index(index: f64) -> Self {
        if index < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if index < OVERWEIGHT_FROM {
            Self::Normal
        } else if index < OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => "You may need to gain weight. Consult with a healthcare provider.",
            Self::Normal => "You have a healthy weight. Keep up the good work!",
            Self::Overweight => "You may benefit from losing weight. Consider diet and exercise.",
            Self::Obese => "Consider consulting with a healthcare provider for weight management.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub index: f64,
    pub category: BmiCategory,
    pub description: String,
    /// Marker position on the category scale, in percent
    pub indicator_position: f64,
}

impl BmiResult {
    /// Index rounded to one decimal, as shown on the result card.
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.index)
    }
}

/// A height as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    Centimeters(f64),
    FeetInches { feet: f64, inches: f64 },
}

impl Height {
    pub fn to_cm(self) -> f64 {
        match self {
            Self::Centimeters(cm) => cm,
            Self::FeetInches { feet, inches } => feet_inches_to_cm(feet, inches),
        }
    }
}

/// A weight as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    Kilograms(f64),
    Pounds(f64),
}

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        match unit {
            WeightUnit::Kilograms => Self::Kilograms(value),
            WeightUnit::Pounds => Self::Pounds(value),
        }
    }

    pub fn to_kg(self) -> f64 {
        match self {
            Self::Kilograms(kg) => kg,
            Self::Pounds(lb) => pounds_to_kg(lb),
        }
    }
}

pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Maps an index onto the 0-100 scale: four bands of 25 points, one per
/// category. The obese band covers indices 30 to 40 and saturates beyond.
pub fn indicator_position(index: f64) -> f64 {
    let position = if index < UNDERWEIGHT_BELOW {
        index / UNDERWEIGHT_BELOW * BAND_WIDTH
    } else if index < OVERWEIGHT_FROM {
        BAND_WIDTH
            + (index - UNDERWEIGHT_BELOW) / (OVERWEIGHT_FROM - UNDERWEIGHT_BELOW) * BAND_WIDTH
    } else if index < OBESE_FROM {
        2.0 * BAND_WIDTH + (index - OVERWEIGHT_FROM) / (OBESE_FROM - OVERWEIGHT_FROM) * BAND_WIDTH
    } else {
        3.0 * BAND_WIDTH + ((index - OBESE_FROM) / OBESE_SPAN * BAND_WIDTH).min(BAND_WIDTH)
    };
    position.clamp(0.0, 100.0)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BmiEvaluator;

impl BmiEvaluator {
    /// `weight / (height in metres)^2`; both inputs must be positive.
    pub fn compute(&self, height_cm: f64, weight_kg: f64) -> CalcResult<BmiResult> {
        let height_cm = ensure_positive("height", height_cm)?;
        let weight_kg = ensure_positive("weight", weight_kg)?;

        let height_m = height_cm / 100.0;
        let index = weight_kg / (height_m * height_m);
        if !index.is_finite() {
            return Err(CalcError::NonFinite);
        }
        let category = BmiCategory::from_index(index);
        debug!(index, category = category.label(), "computed BMI");

        Ok(BmiResult {
            index,
            category,
            description: category.description().to_string(),
            indicator_position: indicator_position(index),
        })
    }

    pub fn compute_with_units(&self, height: Height, weight: Weight) -> CalcResult<BmiResult> {
        self.compute(height.to_cm(), weight.to_kg())
    }
}

impl CalculatorPlugin for BmiEvaluator {
    fn name(&self) -> &str {
        "bmi"
    }

    fn calculate(&self, inputs: &FormInputs) -> CalculationResult {
        let height = match inputs.get_parsed_or("height_unit", HeightUnit::Centimeters)? {
            HeightUnit::Centimeters => Height::Centimeters(inputs.get_f64("height")?),
            HeightUnit::FeetInches => Height::FeetInches {
                feet: inputs.get_f64_or_zero("feet")?,
                inches: inputs.get_f64_or_zero("inches")?,
            },
        };
        let weight_unit = inputs.get_parsed_or("weight_unit", WeightUnit::Kilograms)?;
        let weight = Weight::new(inputs.get_f64("weight")?, weight_unit);

        self.compute_with_units(height, weight).map(CalculationOutput::Bmi)
    }
}
