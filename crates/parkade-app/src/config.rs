//! Configuration management for parkade
//!
//! Config stored at: ~/.config/parkade/config.json

use parkade_domain::model::LotCapacity;
use parkade_domain::service::BillingRates;
use parkade_infra::LotLayout;
use parkade_types::{BillingKind, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Spots per vehicle category
    #[serde(default)]
    pub capacity: LotCapacity,

    /// Hourly and daily rates
    #[serde(default)]
    pub rates: BillingRates,

    /// Billing used when a park request names none
    #[serde(default)]
    pub default_billing: BillingKind,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// tracing filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: LotCapacity::default(),
            rates: BillingRates::default(),
            default_billing: BillingKind::default(),
            output_format: default_output_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("parkade");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Take capacity, and rates when given, from a lot layout
    pub fn apply_layout(&mut self, layout: &LotLayout) {
        self.capacity = layout.capacity;
        if let Some(rates) = layout.rates {
            self.rates = rates;
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parkade Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Car spots:       {}", self.capacity.cars)?;
        writeln!(f, "Bike spots:      {}", self.capacity.bikes)?;
        writeln!(f, "Truck spots:     {}", self.capacity.trucks)?;
        writeln!(f, "Hourly rate:     {}", self.rates.hourly)?;
        writeln!(f, "Daily rate:      {}", self.rates.daily)?;
        writeln!(f, "Default billing: {}", self.default_billing)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Log filter:      {}", self.log_filter)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
