//! Multicalc Types
//!
//! This crate defines the vocabulary shared by the multicalc workspace
//! (currently `multicalc-calculator` and `multicalc-cli`): the calculation error
//! taxonomy, the measurement units accepted by the form-driven calculators and the
//! raw form inputs those calculators read from.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod error;
mod inputs;
mod units;

pub use error::{CalcError, CalcResult};
pub use inputs::FormInputs;
pub use units::{HeightUnit, TermUnit, WeightUnit};
