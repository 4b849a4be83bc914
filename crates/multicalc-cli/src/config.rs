use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use multicalc_types::{HeightUnit, TermUnit, WeightUnit};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "multicalc.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the human readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

/// Units assumed when a form or command leaves them out
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub height_unit: HeightUnit,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub term_unit: TermUnit,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MulticalcConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl MulticalcConfig {
    /// Loads the configuration file.
    ///
    /// An explicit path must exist. Otherwise `MULTICALC_CONFIG_PATH` or
    /// `multicalc.toml` is tried, and a missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = std::env::var("MULTICALC_CONFIG_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        if path.exists() { Self::from_file(&path) } else { Ok(Self::default()) }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to parse configuration file '{}'", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Applies `MULTICALC_*` environment variable overrides.
    pub fn apply_profile(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Values that fail to parse are ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(filter) = lookup("MULTICALC_LOG_FILTER") {
            self.logging.filter = filter;
        }
        if let Some(json) = lookup("MULTICALC_LOG_JSON") {
            if let Ok(json) = json.parse::<bool>() {
                self.logging.json = json;
            }
        }

        if let Some(unit) = lookup("MULTICALC_HEIGHT_UNIT") {
            if let Ok(unit) = unit.parse() {
                self.defaults.height_unit = unit;
            }
        }
        if let Some(unit) = lookup("MULTICALC_WEIGHT_UNIT") {
            if let Ok(unit) = unit.parse() {
                self.defaults.weight_unit = unit;
            }
        }
        if let Some(unit) = lookup("MULTICALC_TERM_UNIT") {
            if let Ok(unit) = unit.parse() {
                self.defaults.term_unit = unit;
            }
        }

        self
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}
