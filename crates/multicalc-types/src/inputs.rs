use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalcError, CalcResult};

/// Raw form field values, exactly as typed by the user.
///
/// Calculators read their inputs through the typed accessors below, which treat a
/// blank field the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    fields: HashMap<String, String>,
}

impl FormInputs {
    /// Creates an empty set of inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`FormInputs::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Gets a non-blank field, trimmed.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    /// Gets a required number.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidInput`] when the field is missing, blank or
    /// not a finite number.
    pub fn get_f64(&self, name: &str) -> CalcResult<f64> {
        let raw = self
            .get_str(name)
            .ok_or_else(|| CalcError::invalid(name, "required input was not provided"))?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CalcError::invalid(name, format!("'{raw}' is not a number")))
    }

    /// Gets an optional number, where a missing or blank field counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidInput`] when the field holds something that is
    /// not a finite number.
    pub fn get_f64_or_zero(&self, name: &str) -> CalcResult<f64> {
        if self.get_str(name).is_none() {
            return Ok(0.0);
        }
        self.get_f64(name)
    }

    /// Gets an optional parsed value (units and the like), falling back to `default`
    /// when the field is absent.
    ///
    /// # Errors
    ///
    /// Propagates the parse error of a present but unrecognised value.
    pub fn get_parsed_or<T>(&self, name: &str, default: T) -> CalcResult<T>
    where
        T: FromStr<Err = CalcError>,
    {
        self.get_str(name).map_or(Ok(default), str::parse)
    }
}

impl<K, V> FromIterator<(K, V)> for FormInputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
