//! Key presses for the basic calculator.
//!
//! Accepts the keyboard names a browser reports (`Enter`, `Escape`, `Backspace`)
//! and the button actions of the on-screen keypad (`equals`, `clear`,
//! `clear-entry`).

use std::str::FromStr;

use multicalc_types::{CalcError, CalcResult};

use crate::arithmetic::Operator;

/// A single decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Equals,
    /// Escape / the `C` button
    Clear,
    /// Backspace / the `CE` button
    ClearEntry,
}

impl Key {
    /// Decodes a keyboard event key or keypad action name. Unrecognised keys
    /// yield `None` so the caller can let them through untouched.
    pub fn from_keyboard(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" | "equals" => Some(Self::Equals),
            "Escape" | "clear" | "C" | "c" => Some(Self::Clear),
            "Backspace" | "clear-entry" | "CE" | "ce" => Some(Self::ClearEntry),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_digit() || c == '.' {
                    Some(Self::Digit(c))
                } else {
                    Operator::from_symbol(c).map(Self::Operator)
                }
            }
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyboard(s.trim())
            .ok_or_else(|| CalcError::invalid("key", format!("unknown key '{s}'")))
    }
}

/// Decodes a sequence of tokens, expanding multi-digit numbers such as `12.5`
/// into one press per character.
pub fn parse_keys<I, S>(tokens: I) -> CalcResult<Vec<Key>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if let Some(key) = Key::from_keyboard(token) {
            keys.push(key);
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            keys.extend(token.chars().map(Key::Digit));
        } else {
            return Err(CalcError::invalid("key", format!("unknown key '{token}'")));
        }
    }
    Ok(keys)
}
