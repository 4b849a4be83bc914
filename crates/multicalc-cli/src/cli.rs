use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use multicalc_calculator::age::parse_date;
use multicalc_calculator::{
    AgeEvaluator, ArithmeticEngine, BmiEvaluator, CalcError, CalcResult, CalculationOutput,
    CalculationResult, Calculator, FormInputs, Height, HeightUnit, LoanEvaluator, TermUnit,
    Weight, WeightUnit, parse_keys,
};
use tracing::{debug, warn};

use crate::config::MulticalcConfig;
use crate::render;

/// Basic, BMI, loan and age calculators
#[derive(Parser, Debug)]
#[command(name = "multicalc", version)]
#[command(about = "Basic, BMI, loan and age calculators")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to $MULTICALC_CONFIG_PATH, then multicalc.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed key presses to the basic calculator, e.g. `keys 12 + 3 x 2 =`
    Keys(KeysArgs),
    /// Body mass index
    Bmi(BmiArgs),
    /// Monthly payment of an amortized loan
    Loan(LoanArgs),
    /// Exact age from a birth date
    Age(AgeArgs),
    /// Run a calculator by mode name from raw `field=value` pairs
    Form(FormArgs),
    /// List the calculator modes accepted by `form`
    Modes,
}

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Digits, numbers, operators (+ - x * /), =, C, CE, or keyboard names
    /// such as Enter, Escape and Backspace
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BmiArgs {
    /// Height in centimetres
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Feet, used with `--height-unit ft`
    #[arg(long, allow_negative_numbers = true)]
    pub feet: Option<f64>,

    /// Inches, used with `--height-unit ft`
    #[arg(long, allow_negative_numbers = true)]
    pub inches: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// cm or ft
    #[arg(long)]
    pub height_unit: Option<HeightUnit>,

    /// kg or lb
    #[arg(long)]
    pub weight_unit: Option<WeightUnit>,
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub term: f64,

    /// months or years
    #[arg(long)]
    pub term_unit: Option<TermUnit>,
}

#[derive(Args, Debug)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: String,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub on: Option<String>,
}

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Calculator mode (see `modes`)
    pub mode: String,

    /// Form fields as `field=value`
    #[arg(value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected field=value, got '{raw}'"))
}

impl Cli {
    /// Runs the command and returns what should be printed on stdout.
    pub fn execute(&self, config: &MulticalcConfig) -> anyhow::Result<String> {
        match &self.command {
            Command::Keys(args) => self.run_keys(args),
            Command::Bmi(args) => self.render("bmi", bmi(args, config)),
            Command::Loan(args) => self.render("loan", loan(args, config)),
            Command::Age(args) => self.render("age", age(args)),
            Command::Form(args) => self.run_form(args, config),
            Command::Modes => Ok(Calculator::new().modes().join("\n")),
        }
    }

    fn run_keys(&self, args: &KeysArgs) -> anyhow::Result<String> {
        let keys = parse_keys(&args.keys)?;
        let mut engine = ArithmeticEngine::new();
        for key in keys {
            // Failures show up on the display; keep feeding keys like a keypad would.
            if let Err(err) = engine.press(key) {
                debug!(?key, error = %err, "key press failed");
            }
        }

        if self.json { Ok(render::keys_json(&engine)?) } else { Ok(render::keys_text(&engine)) }
    }

    fn run_form(&self, args: &FormArgs, config: &MulticalcConfig) -> anyhow::Result<String> {
        let mut inputs: FormInputs = args.fields.iter().cloned().collect();
        apply_unit_defaults(&mut inputs, config);

        let calculator = Calculator::new();
        let result = calculator.calculate(&args.mode, &inputs);
        if let Err(CalcError::UnknownCalculator(mode)) = &result {
            bail!("unknown calculator mode '{mode}' (available: {})", calculator.modes().join(", "));
        }
        self.render(&args.mode, result)
    }

    fn render(&self, mode: &str, result: CalculationResult) -> anyhow::Result<String> {
        if let Err(err) = &result {
            warn!(mode, error = %err, "calculation produced no result");
        }

        if self.json {
            Ok(render::output_json(mode, &result)?)
        } else {
            Ok(render::output_text(mode, &result))
        }
    }
}

/// Fills in unit fields the form left out from the configured defaults.
fn apply_unit_defaults(inputs: &mut FormInputs, config: &MulticalcConfig) {
    let defaults = &config.defaults;
    let units = [
        ("height_unit", defaults.height_unit.to_string()),
        ("weight_unit", defaults.weight_unit.to_string()),
        ("term_unit", defaults.term_unit.to_string()),
    ];
    for (field, unit) in units {
        if inputs.get_str(field).is_none() {
            inputs.insert(field, unit);
        }
    }
}

fn bmi(args: &BmiArgs, config: &MulticalcConfig) -> CalculationResult {
    let height_unit = args.height_unit.unwrap_or(config.defaults.height_unit);
    let weight_unit = args.weight_unit.unwrap_or(config.defaults.weight_unit);

    let height = match height_unit {
        HeightUnit::Centimeters => args.height.map(Height::Centimeters),
        HeightUnit::FeetInches => Some(Height::FeetInches {
            feet: args.feet.unwrap_or_default(),
            inches: args.inches.unwrap_or_default(),
        }),
    }
    .ok_or_else(|| CalcError::invalid("height", "required input was not provided"))?;
    let weight = args
        .weight
        .map(|w| Weight::new(w, weight_unit))
        .ok_or_else(|| CalcError::invalid("weight", "required input was not provided"))?;

    BmiEvaluator.compute_with_units(height, weight).map(CalculationOutput::Bmi)
}

fn loan(args: &LoanArgs, config: &MulticalcConfig) -> CalculationResult {
    let term_unit = args.term_unit.unwrap_or(config.defaults.term_unit);
    LoanEvaluator
        .compute(args.amount, args.rate, args.term, term_unit)
        .map(CalculationOutput::Loan)
}

fn age(args: &AgeArgs) -> CalculationResult {
    let result: CalcResult<_> = match &args.on {
        Some(on) => AgeEvaluator.compute(&args.birth_date, parse_date("on", on)?),
        None => AgeEvaluator.compute_today(&args.birth_date),
    };
    result.map(CalculationOutput::Age)
}
