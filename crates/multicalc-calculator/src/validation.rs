use multicalc_types::{CalcError, CalcResult};

/// Accepts finite values strictly above zero.
pub fn ensure_positive(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, "must be greater than zero"))
    }
}

/// Accepts finite values of zero or more.
pub fn ensure_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, "must not be negative"))
    }
}

pub fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, "is not a number"))
    }
}
