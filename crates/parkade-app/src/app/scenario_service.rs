//! Scenario Service - replay recorded park/exit events against a lot
//!
//! Tickets are held per plate while the vehicle is inside. Events that cannot
//! be applied (full pool, plate already inside, exit without a ticket) are
//! recorded as rejections and the replay carries on.

use std::collections::HashMap;

use parkade_domain::model::{LotCapacity, PoolOccupancy, Receipt, ScenarioEvent, Ticket};
use parkade_domain::service::BillingRates;
use parkade_types::{BillingKind, SpotId, Timestamp, TicketNumber, Vehicle, VehicleCategory};
use serde::Serialize;
use tracing::warn;

use super::lot_manager::LotManager;

/// Billing settings applied while replaying
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioOptions {
    pub rates: BillingRates,
    /// Used for park events that do not name a billing kind
    pub default_billing: BillingKind,
}

/// An event that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 1-based position of the event in the scenario
    pub step: usize,
    pub plate: String,
    pub time: Timestamp,
    pub reason: String,
}

/// A vehicle still inside when the scenario ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkedVehicle {
    pub ticket: TicketNumber,
    pub plate: String,
    pub category: VehicleCategory,
    pub spot: SpotId,
    pub entry_time: Timestamp,
}

impl From<&Ticket> for ParkedVehicle {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket: ticket.number(),
            plate: ticket.vehicle().plate().to_string(),
            category: ticket.category(),
            spot: ticket.spot_id(),
            entry_time: ticket.entry_time(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub receipts: Vec<Receipt>,
    pub rejections: Vec<Rejection>,
    pub still_parked: Vec<ParkedVehicle>,
    pub occupancy: Vec<PoolOccupancy>,
}

impl ScenarioReport {
    pub fn total_fees(&self) -> u64 {
        self.receipts
            .iter()
            .fold(0u64, |sum, r| sum.saturating_add(r.fee))
    }
}

pub fn run_scenario(
    lot: &LotManager,
    events: &[ScenarioEvent],
    options: &ScenarioOptions,
) -> ScenarioReport {
    let mut open: HashMap<String, Ticket> = HashMap::new();
    let mut report = ScenarioReport::default();

    for (index, event) in events.iter().enumerate() {
        let step = index + 1;
        let outcome = match event {
            ScenarioEvent::Park {
                plate,
                category,
                time,
                billing,
            } => {
                if let Some(existing) = open.get(plate) {
                    Err(format!("already parked on ticket {}", existing.number()))
                } else {
                    let strategy = options
                        .rates
                        .strategy(billing.unwrap_or(options.default_billing));
                    lot.park_vehicle(Vehicle::new(plate.clone(), *category), *time, strategy)
                        .map(|ticket| {
                            open.insert(plate.clone(), ticket);
                        })
                        .map_err(|e| e.to_string())
                }
            }
            ScenarioEvent::Exit { plate, time } => match open.remove(plate) {
                None => Err("no open ticket for this plate".to_string()),
                Some(mut ticket) => lot
                    .exit_vehicle(&mut ticket, *time)
                    .map_err(|e| e.to_string())
                    .and_then(|_| ticket.receipt().map_err(|e| e.to_string()))
                    .map(|receipt| report.receipts.push(receipt)),
            },
        };

        if let Err(reason) = outcome {
            warn!(step, plate = event.plate(), "scenario event rejected: {}", reason);
            report.rejections.push(Rejection {
                step,
                plate: event.plate().to_string(),
                time: event.time(),
                reason,
            });
        }
    }

    let mut still_parked: Vec<ParkedVehicle> = open.values().map(ParkedVehicle::from).collect();
    still_parked.sort_by_key(|p| p.ticket);
    report.still_parked = still_parked;
    report.occupancy = lot.occupancy();
    report
}

/// The three-vehicle walk-through: a 2/2/1 lot, a car and a bike billed
/// hourly and a truck billed daily. Fees come out as 30, 40 and 100.
pub fn reference_scenario() -> (LotCapacity, Vec<ScenarioEvent>) {
    let park = |plate: &str, category, time, billing| ScenarioEvent::Park {
        plate: plate.to_string(),
        category,
        time,
        billing: Some(billing),
    };
    let exit = |plate: &str, time| ScenarioEvent::Exit {
        plate: plate.to_string(),
        time,
    };

    let events = vec![
        park("KA-01-1234", VehicleCategory::Car, 1, BillingKind::Hourly),
        park("KA-02-5678", VehicleCategory::Bike, 2, BillingKind::Hourly),
        park("KA-03-9999", VehicleCategory::Truck, 5, BillingKind::Daily),
        exit("KA-01-1234", 4),
        exit("KA-02-5678", 6),
        exit("KA-03-9999", 29),
    ];
    (LotCapacity::new(2, 2, 1), events)
}
