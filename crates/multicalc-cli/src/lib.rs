//! Command-line adapter for the multicalc calculators
//!
//! Reads key presses and form values from the command line, hands them to the
//! calculators and renders their results the way the calculator cards do.

pub mod cli;
pub mod config;
pub mod render;
pub mod tracing_setup;

pub use cli::Cli;
pub use config::MulticalcConfig;
