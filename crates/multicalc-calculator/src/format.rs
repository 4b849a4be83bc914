//! Display formatting for arithmetic results.
//!
//! Results whose magnitude is above [`SCIENTIFIC_UPPER`] or below
//! [`SCIENTIFIC_LOWER`] (but not zero) are shown in scientific notation with six
//! mantissa digits; everything else is rounded to ten decimals with trailing
//! zeros dropped.

use multicalc_types::{CalcError, CalcResult};

/// Magnitudes strictly above this are shown in scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e15;
/// Non-zero magnitudes strictly below this are shown in scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-10;

const FIXED_DECIMALS: usize = 10;
const MANTISSA_DECIMALS: usize = 6;

/// Formats a computed value for the calculator display.
///
/// # Errors
///
/// Returns [`CalcError::NonFinite`] for infinities and NaN.
pub fn format_result(value: f64) -> CalcResult<String> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    let magnitude = value.abs();
    if magnitude > SCIENTIFIC_UPPER || (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER) {
        return Ok(to_exponential(value));
    }

    let rounded: f64 = format!("{:.*}", FIXED_DECIMALS, value)
        .parse()
        .map_err(|_| CalcError::NonFinite)?;

    // -0 and values that round to zero both display as a plain zero
    if rounded == 0.0 {
        return Ok("0".to_string());
    }
    Ok(rounded.to_string())
}

/// `1.000000e+16` style: fixed mantissa digits and an explicitly signed exponent.
fn to_exponential(value: f64) -> String {
    let formatted = format!("{:.*e}", MANTISSA_DECIMALS, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{mantissa}e{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => formatted,
    }
}
