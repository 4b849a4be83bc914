//! Basic four-function calculator with pending-operation state.
//!
//! Operations chain strictly left to right: `2 + 3 × 4 =` evaluates `2 + 3` as soon
//! as `×` is pressed and shows `20`. Failures never escape as panics; the display
//! switches to [`ERROR_DISPLAY`] and the engine waits for a fresh entry.

use std::fmt;
use std::str::FromStr;

use multicalc_types::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::format_result;
use crate::keypad::Key;

/// Text shown on the display after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

const IDENTITY_ENTRY: &str = "0";

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Accepts both the keyboard symbols (`* /`) and the display symbols (`× ÷`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Symbol used on the history line.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Applies the operator, rejecting a zero divisor and non-finite results.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() { Ok(result) } else { Err(CalcError::NonFinite) }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| CalcError::invalid("operator", format!("unknown operator '{s}'")))
    }
}

/// State of the basic calculator.
///
/// Invariant: whenever `pending_operator` is set, `pending_value` holds the finite
/// left operand captured when the operator was chosen, and `pending_entry` the
/// text it was typed as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticEngine {
    current_entry: String,
    pending_value: Option<f64>,
    pending_entry: Option<String>,
    pending_operator: Option<Operator>,
    awaiting_new_entry: bool,
    history: String,
}

impl Default for ArithmeticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticEngine {
    pub fn new() -> Self {
        Self {
            current_entry: IDENTITY_ENTRY.to_string(),
            pending_value: None,
            pending_entry: None,
            pending_operator: None,
            awaiting_new_entry: false,
            history: String::new(),
        }
    }

    /// Text on the main display.
    pub fn current_display_value(&self) -> &str {
        &self.current_entry
    }

    /// Secondary display line: `"2 +"` while an operator is pending,
    /// `"2 + 3 = 5"` after an evaluation, `"Error"` after a failure.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn pending_value(&self) -> Option<f64> {
        self.pending_value
    }

    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    pub fn is_error(&self) -> bool {
        self.current_entry == ERROR_DISPLAY
    }

    /// Dispatches a decoded key press.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate().map(|_| ()),
            Key::Clear => {
                self.clear_all();
                Ok(())
            }
            Key::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
        }
    }

    /// Appends a digit or the decimal point to the entry.
    ///
    /// A second decimal point in the same entry is ignored. When a new entry is
    /// expected the buffer is replaced instead (`.` starts `0.`).
    pub fn input_digit(&mut self, digit: char) -> CalcResult<()> {
        if digit != '.' && !digit.is_ascii_digit() {
            return Err(CalcError::invalid("digit", format!("'{digit}' is not a digit")));
        }

        let fresh = self.awaiting_new_entry || self.is_error();
        if digit == '.' {
            if fresh {
                self.current_entry = "0.".to_string();
            } else if !self.current_entry.contains('.') {
                self.current_entry.push('.');
            }
        } else if fresh || self.current_entry == IDENTITY_ENTRY {
            self.current_entry = digit.to_string();
        } else {
            self.current_entry.push(digit);
        }

        self.awaiting_new_entry = false;
        Ok(())
    }

    /// Chooses the next operator.
    ///
    /// A pending operation whose right operand has been typed is evaluated first;
    /// if that evaluation fails its error is returned and the new operator is
    /// dropped. Pressing an operator while the display shows an error does nothing.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<()> {
        if self.is_error() {
            debug!(operator = %op, "ignoring operator while the display shows an error");
            return Ok(());
        }

        if self.pending_operator.is_some() && !self.awaiting_new_entry {
            self.evaluate()?;
        }

        let value = match self.entry_value() {
            Ok(value) => value,
            Err(err) => return Err(self.fail(err)),
        };
        self.pending_value = Some(value);
        self.pending_entry = Some(self.current_entry.clone());
        self.pending_operator = Some(op);
        self.awaiting_new_entry = true;
        self.history = format!("{} {}", self.current_entry, op.symbol());
        Ok(())
    }

    /// Applies the pending operator to the stored operand and the current entry.
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate (no operator pending,
    /// or no right operand typed yet).
    pub fn evaluate(&mut self) -> CalcResult<Option<f64>> {
        let (Some(op), Some(lhs)) = (self.pending_operator, self.pending_value) else {
            return Ok(None);
        };
        if self.awaiting_new_entry {
            return Ok(None);
        }

        let outcome = self
            .entry_value()
            .and_then(|rhs| op.apply(lhs, rhs))
            .and_then(|result| format_result(result).map(|text| (result, text)));

        match outcome {
            Ok((result, text)) => {
                let lhs_text = self.pending_entry.take().unwrap_or_default();
                self.history = format!("{lhs_text} {} {} = {text}", op.symbol(), self.current_entry);
                debug!(history = %self.history, "evaluated pending operation");
                self.current_entry = text;
                self.pending_value = None;
                self.pending_operator = None;
                self.awaiting_new_entry = true;
                Ok(Some(result))
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Puts the engine in the error state and hands back `err`.
    fn fail(&mut self, err: CalcError) -> CalcError {
        debug!(error = %err, "evaluation failed");
        self.current_entry = ERROR_DISPLAY.to_string();
        self.history = ERROR_DISPLAY.to_string();
        self.pending_value = None;
        self.pending_entry = None;
        self.pending_operator = None;
        self.awaiting_new_entry = true;
        err
    }

    /// Back to the identity state.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Removes the last character of the entry.
    pub fn clear_entry(&mut self) {
        if self.is_error() {
            self.current_entry = IDENTITY_ENTRY.to_string();
            return;
        }

        self.current_entry.pop();
        if self.current_entry.is_empty() || self.current_entry == "-" {
            self.current_entry = IDENTITY_ENTRY.to_string();
        }
    }

    fn entry_value(&self) -> CalcResult<f64> {
        let value = self.current_entry.parse::<f64>().map_err(|_| {
            CalcError::invalid("entry", format!("'{}' is not a number", self.current_entry))
        })?;
        // Entries longer than f64 can hold parse to infinity.
        if value.is_finite() { Ok(value) } else { Err(CalcError::NonFinite) }
    }
}
