//! Receipt issued when a ticket closes

use parkade_types::{BillingKind, Fee, SpotId, Timestamp, TicketNumber, VehicleCategory};
use serde::{Deserialize, Serialize};

/// Summary of a closed ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub ticket: TicketNumber,
    pub plate: String,
    pub category: VehicleCategory,
    pub spot: SpotId,
    pub entry_time: Timestamp,
    pub exit_time: Timestamp,
    pub billing: BillingKind,
    pub fee: Fee,
}

impl Receipt {
    pub fn hours_parked(&self) -> i64 {
        self.exit_time.saturating_sub(self.entry_time)
    }
}
