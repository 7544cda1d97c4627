//! Lot layout loader from TOML
//!
//! ```toml
//! [capacity]
//! cars = 20
//! bikes = 10
//! trucks = 2
//!
//! [rates]
//! hourly = 10
//! daily = 100
//! ```

use std::fs;
use std::path::Path;

use parkade_domain::model::LotCapacity;
use parkade_domain::service::BillingRates;
use parkade_types::{Error, Result};
use serde::Deserialize;

/// Capacities and optional rates for a lot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LotLayout {
    pub capacity: LotCapacity,
    #[serde(default)]
    pub rates: Option<BillingRates>,
}

impl LotLayout {
    /// Load a layout from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Layout(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::load_from_str(&content)
    }

    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content)
            .map_err(|e| Error::Layout(format!("Failed to parse lot layout TOML: {}", e)))
    }
}
