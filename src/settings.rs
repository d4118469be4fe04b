//! Application settings.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `LOANWISE__*` environment variables (e.g. `LOANWISE__MORTGAGE__TERM=30`).
//! Command-line flags are applied on top by the binary.

use crate::domain::compounding::CompoundingConvention;
use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/loanwise.toml";

/// Values a loan form starts out with.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LoanDefaults {
    pub annual_rate_percent: f64,
    /// Years for the mortgage, months for the car loan.
    pub term: f64,
    pub compounding: CompoundingConvention,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub mortgage: LoanDefaults,
    pub car_loan: LoanDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            mortgage: LoanDefaults {
                annual_rate_percent: 3.5,
                term: 15.0,
                compounding: CompoundingConvention::Monthly,
            },
            car_loan: LoanDefaults {
                annual_rate_percent: 4.5,
                term: 60.0,
                compounding: CompoundingConvention::Monthly,
            },
        }
    }
}

impl Settings {
    /// Loads settings, reading `path` when given or the default location otherwise.
    ///
    /// The default location is optional; an explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default(
                "mortgage.annual_rate_percent",
                defaults.mortgage.annual_rate_percent,
            )?
            .set_default("mortgage.term", defaults.mortgage.term)?
            .set_default("mortgage.compounding", defaults.mortgage.compounding.to_string())?
            .set_default(
                "car_loan.annual_rate_percent",
                defaults.car_loan.annual_rate_percent,
            )?
            .set_default("car_loan.term", defaults.car_loan.term)?
            .set_default("car_loan.compounding", defaults.car_loan.compounding.to_string())?
            .add_source(file)
            .add_source(
                Environment::with_prefix("LOANWISE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
