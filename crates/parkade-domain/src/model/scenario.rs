//! Recorded park/exit events that can be replayed against a lot

use parkade_types::{BillingKind, Timestamp, VehicleCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScenarioEvent {
    Park {
        plate: String,
        category: VehicleCategory,
        time: Timestamp,
        /// Falls back to the configured default when absent
        billing: Option<BillingKind>,
    },
    Exit {
        plate: String,
        time: Timestamp,
    },
}

impl ScenarioEvent {
    pub fn plate(&self) -> &str {
        match self {
            ScenarioEvent::Park { plate, .. } | ScenarioEvent::Exit { plate, .. } => plate,
        }
    }

    pub fn time(&self) -> Timestamp {
        match self {
            ScenarioEvent::Park { time, .. } | ScenarioEvent::Exit { time, .. } => *time,
        }
    }
}
