//! Lot Manager - single entry point for parking and leaving
//!
//! Holds one lock-protected pool per category. Parking reserves a spot and
//! issues the ticket inside that pool's critical section, so concurrent
//! callers never share a spot. A full pool is reported immediately; nothing
//! waits for capacity.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parkade_domain::model::{LotCapacity, PoolHandle, PoolOccupancy, SpotPool, Ticket};
use parkade_domain::service::BillingStrategy;
use parkade_types::{Fee, ParkingError, Timestamp, TicketNumber, Vehicle, VehicleCategory};
use tracing::{info, warn};

#[derive(Debug)]
pub struct LotManager {
    pools: BTreeMap<VehicleCategory, PoolHandle>,
    next_ticket: AtomicU64,
}

impl LotManager {
    pub fn new(car_count: u32, bike_count: u32, truck_count: u32) -> Self {
        Self::from_capacity(LotCapacity::new(car_count, bike_count, truck_count))
    }

    pub fn from_capacity(capacity: LotCapacity) -> Self {
        let pools = VehicleCategory::ALL
            .into_iter()
            .map(|category| {
                let pool = SpotPool::create(category, capacity.for_category(category));
                (category, PoolHandle::new(pool))
            })
            .collect();
        info!(
            cars = capacity.cars,
            bikes = capacity.bikes,
            trucks = capacity.trucks,
            "lot initialized"
        );
        Self {
            pools,
            next_ticket: AtomicU64::new(1),
        }
    }

    /// Park `vehicle` in the lowest free spot of its category.
    ///
    /// Returns `NoSpotAvailable` without touching any pool when the category
    /// is full.
    pub fn park_vehicle(
        &self,
        vehicle: Vehicle,
        entry_time: Timestamp,
        billing: BillingStrategy,
    ) -> Result<Ticket, ParkingError> {
        let category = vehicle.category();
        let plate = vehicle.plate().to_string();
        let pool = self.pool(category);

        match pool.issue_ticket(self.reserve_number(), vehicle, entry_time, billing) {
            Ok(ticket) => {
                info!(
                    ticket = %ticket.number(),
                    plate = %plate,
                    category = %category,
                    spot = %ticket.spot_id(),
                    entry_time,
                    billing = %billing,
                    "vehicle parked"
                );
                Ok(ticket)
            }
            Err(err) => {
                warn!(plate = %plate, category = %category, "park rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Close a ticket issued by this lot, release its spot and return the fee
    pub fn exit_vehicle(
        &self,
        ticket: &mut Ticket,
        exit_time: Timestamp,
    ) -> Result<Fee, ParkingError> {
        if !ticket.belongs_to(self.pool(ticket.category())) {
            return Err(ParkingError::ForeignTicket(ticket.number()));
        }
        ticket.exit(exit_time)?;
        let fee = ticket.fee()?;
        info!(
            ticket = %ticket.number(),
            plate = %ticket.vehicle().plate(),
            category = %ticket.category(),
            spot = %ticket.spot_id(),
            exit_time,
            fee,
            "vehicle left"
        );
        Ok(fee)
    }

    pub fn capacity(&self, category: VehicleCategory) -> u32 {
        self.pool(category).occupancy().capacity
    }

    pub fn free_spots(&self, category: VehicleCategory) -> u32 {
        self.pool(category).occupancy().free()
    }

    /// Occupancy of every pool, in category order
    pub fn occupancy(&self) -> Vec<PoolOccupancy> {
        self.pools.values().map(PoolHandle::occupancy).collect()
    }

    /// Read-only view of one pool
    pub fn inspect_pool<R>(&self, category: VehicleCategory, f: impl FnOnce(&SpotPool) -> R) -> R {
        self.pool(category).inspect(f)
    }

    fn pool(&self, category: VehicleCategory) -> &PoolHandle {
        // Every category gets a pool in from_capacity
        &self.pools[&category]
    }

    fn reserve_number(&self) -> TicketNumber {
        TicketNumber(self.next_ticket.fetch_add(1, Ordering::Relaxed))
    }
}
