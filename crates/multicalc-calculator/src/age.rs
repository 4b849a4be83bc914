//! Age Calculator
//!
//! Calendar-aware difference between a birth date and a reference date.
//! Inputs:
//!   * `birth_date`: `YYYY-MM-DD` (an RFC 3339 timestamp is also accepted; its date
//!     part is used)
//!   * optional `reference_date`, defaulting to today's local date

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};
use multicalc_types::{CalcError, CalcResult, FormInputs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plugin::{CalculationOutput, CalculationResult, CalculatorPlugin};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub days_to_next_anniversary: i64,
    pub next_anniversary: NaiveDate,
    pub birth_weekday: Weekday,
}

impl AgeResult {
    pub fn birth_weekday_name(&self) -> &'static str {
        weekday_name(self.birth_weekday)
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months, {} days", self.years, self.months, self.days)
    }
}

pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a date field, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(field: &str, raw: &str) -> CalcResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CalcError::invalid(field, "required input was not provided"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|e| CalcError::invalid(field, format!("invalid date '{raw}': {e}")))
}

/// Years, months and days between two dates, borrowing from the month before
/// the reference month whenever the day difference goes negative.
pub fn calendar_difference(birth: NaiveDate, reference: NaiveDate) -> (u32, u32, u32) {
    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    let mut borrow_from = last_day_of_preceding_month(reference);
    while days < 0 {
        let Some(month_end) = borrow_from else { break };
        days += month_end.day() as i32;
        months -= 1;
        borrow_from = last_day_of_preceding_month(month_end);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    debug_assert!(years >= 0 && months >= 0 && days >= 0);
    (years.unsigned_abs(), months.unsigned_abs(), days.unsigned_abs())
}

fn last_day_of_preceding_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1).and_then(|first| first.pred_opt())
}

/// The birth month/day in `year`; 29 February rolls over to 1 March in common years.
fn anniversary_in(birth: NaiveDate, year: i32) -> CalcResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .ok_or_else(|| CalcError::invalid("reference_date", "outside the supported calendar"))
}

/// First anniversary strictly after `reference`.
pub fn next_anniversary(birth: NaiveDate, reference: NaiveDate) -> CalcResult<NaiveDate> {
    let this_year = anniversary_in(birth, reference.year())?;
    if this_year <= reference { anniversary_in(birth, reference.year() + 1) } else { Ok(this_year) }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AgeEvaluator;

impl AgeEvaluator {
    pub fn compute(&self, birth_date_iso: &str, reference: NaiveDate) -> CalcResult<AgeResult> {
        let birth = parse_date("birth_date", birth_date_iso)?;
        self.compute_dates(birth, reference)
    }

    /// Age as of the local calendar date.
    pub fn compute_today(&self, birth_date_iso: &str) -> CalcResult<AgeResult> {
        self.compute(birth_date_iso, Local::now().date_naive())
    }

    pub fn compute_dates(&self, birth: NaiveDate, reference: NaiveDate) -> CalcResult<AgeResult> {
        if birth > reference {
            return Err(CalcError::invalid("birth_date", "is after the reference date"));
        }

        let (years, months, days) = calendar_difference(birth, reference);
        let total_days = (reference - birth).num_days();
        let next_anniversary = next_anniversary(birth, reference)?;
        let days_to_next_anniversary = (next_anniversary - reference).num_days();

        debug!(%birth, %reference, years, months, days, total_days, "computed age");
        Ok(AgeResult {
            years,
            months,
            days,
            total_days,
            days_to_next_anniversary,
            next_anniversary,
            birth_weekday: birth.weekday(),
        })
    }
}

impl CalculatorPlugin for AgeEvaluator {
    fn name(&self) -> &str {
        "age"
    }

    fn calculate(&self, inputs: &FormInputs) -> CalculationResult {
        let birth = inputs.get_str("birth_date").unwrap_or_default();
        let result = match inputs.get_str("reference_date") {
            Some(raw) => self.compute(birth, parse_date("reference_date", raw)?),
            None => self.compute_today(birth),
        };
        result.map(CalculationOutput::Age)
    }
}
