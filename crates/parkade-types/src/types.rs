//! Value types shared across the workspace

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-supplied instant, in whole hour ticks
pub type Timestamp = i64;

/// Monetary amount in whole currency units
pub type Fee = u64;

/// Vehicle category. Each category draws from its own spot pool.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
    Truck,
}

impl VehicleCategory {
    /// Every category, in pool order
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::Truck,
    ];

    /// Lowercase label used in files and on the command line
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Bike => "bike",
            VehicleCategory::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleCategory::Car),
            "bike" => Ok(VehicleCategory::Bike),
            "truck" => Ok(VehicleCategory::Truck),
            other => Err(format!("unknown vehicle category '{}'", other)),
        }
    }
}

/// A vehicle identified by its license plate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    category: VehicleCategory,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, category: VehicleCategory) -> Self {
        Self {
            plate: plate.into(),
            category,
        }
    }

    pub fn car(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Car)
    }

    pub fn bike(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Bike)
    }

    pub fn truck(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Truck)
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.plate, self.category)
    }
}

/// Spot number, unique within one category's pool (1-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u32);

impl SpotId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential ticket number issued by a lot
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(pub u64);

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{:05}", self.0)
    }
}

/// Billing policy selector used by config, CLI and scenario files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingKind {
    #[default]
    Hourly,
    Daily,
}

impl fmt::Display for BillingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingKind::Hourly => write!(f, "hourly"),
            BillingKind::Daily => write!(f, "daily"),
        }
    }
}

impl FromStr for BillingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(BillingKind::Hourly),
            "daily" => Ok(BillingKind::Daily),
            other => Err(format!("unknown billing kind '{}'", other)),
        }
    }
}
