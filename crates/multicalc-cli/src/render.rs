//! Text and JSON rendering of calculator results.
//!
//! Invalid input renders the neutral placeholders of each result card rather
//! than an error message.

use multicalc_calculator::{
    AgeResult, ArithmeticEngine, BmiResult, CalculationOutput, CalculationResult, LoanResult,
};
use serde_json::json;

pub fn keys_text(engine: &ArithmeticEngine) -> String {
    if engine.history().is_empty() {
        engine.current_display_value().to_string()
    } else {
        format!("{}\n{}", engine.history(), engine.current_display_value())
    }
}

pub fn keys_json(engine: &ArithmeticEngine) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "display": engine.current_display_value(),
        "history": engine.history(),
        "error": engine.is_error(),
    }))
}

pub fn output_text(mode: &str, result: &CalculationResult) -> String {
    match result {
        Ok(CalculationOutput::Bmi(bmi)) => bmi_text(bmi),
        Ok(CalculationOutput::Loan(loan)) => loan_text(loan),
        Ok(CalculationOutput::Age(age)) => age_text(age),
        Err(_) => placeholder_text(mode),
    }
}

pub fn output_json(mode: &str, result: &CalculationResult) -> serde_json::Result<String> {
    match result {
        Ok(output) => serde_json::to_string_pretty(output),
        Err(err) => serde_json::to_string_pretty(&json!({
            "mode": mode,
            "valid": false,
            "error": err,
        })),
    }
}

fn bmi_text(result: &BmiResult) -> String {
    format!(
        "BMI: {}\nCategory: {}\n{}\nIndicator: {:.1}%",
        result.display_value(),
        result.category.label(),
        result.description,
        result.indicator_position
    )
}

fn loan_text(result: &LoanResult) -> String {
    format!(
        "Monthly payment: ${:.2}\nTotal interest: ${:.2}\nTotal payment: ${:.2}\nPrincipal: ${:.2}",
        result.periodic_payment, result.total_interest, result.total_payment, result.principal
    )
}

fn age_text(result: &AgeResult) -> String {
    format!(
        "Age: {}\nExact age: {result}\nTotal days: {}\nNext birthday: {} days ({})\nBorn on: {}",
        result.years,
        result.total_days,
        result.days_to_next_anniversary,
        result.next_anniversary.format("%Y-%m-%d"),
        result.birth_weekday_name()
    )
}

fn placeholder_text(mode: &str) -> String {
    match mode {
        "bmi" => "BMI: --\nCategory: Enter your details".to_string(),
        "loan" => {
            "Monthly payment: $0\nTotal interest: $0\nTotal payment: $0\nPrincipal: $0".to_string()
        }
        "age" => "Age: 0\nExact age: Select your birth date\nTotal days: 0\nNext birthday: --\nBorn on: --"
            .to_string(),
        _ => "--".to_string(),
    }
}
