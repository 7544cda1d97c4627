//! Shared, lock-protected access to one spot pool
//!
//! Every occupancy change goes through the pool's mutex: reservation and
//! ticket creation happen in one critical section, and so does release.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use parkade_types::{ParkingError, SpotId, Timestamp, TicketNumber, Vehicle, VehicleCategory};

use super::spot_pool::{PoolOccupancy, SpotPool};
use super::ticket::Ticket;
use crate::service::BillingStrategy;

#[derive(Clone)]
pub struct PoolHandle {
    category: VehicleCategory,
    pool: Arc<Mutex<SpotPool>>,
}

impl PoolHandle {
    pub fn new(pool: SpotPool) -> Self {
        Self {
            category: pool.category(),
            pool: Arc::new(Mutex::new(pool)),
        }
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Reserve the lowest free spot and issue an open ticket for it
    pub fn issue_ticket(
        &self,
        number: TicketNumber,
        vehicle: Vehicle,
        entry_time: Timestamp,
        billing: BillingStrategy,
    ) -> Result<Ticket, ParkingError> {
        let mut pool = self.lock();
        let spot = pool.reserve(vehicle.clone())?;
        Ok(Ticket::open(
            number,
            vehicle,
            self.clone(),
            spot,
            entry_time,
            billing,
        ))
    }

    pub fn release(&self, spot: SpotId) -> Option<Vehicle> {
        self.lock().release(spot)
    }

    /// Run `f` against a consistent view of the pool
    pub fn inspect<R>(&self, f: impl FnOnce(&SpotPool) -> R) -> R {
        f(&*self.lock())
    }

    pub fn occupancy(&self) -> PoolOccupancy {
        self.lock().occupancy()
    }

    pub fn is_same_pool(&self, other: &PoolHandle) -> bool {
        Arc::ptr_eq(&self.pool, &other.pool)
    }

    // Mutations are single-field writes, so a poisoned pool is still consistent.
    fn lock(&self) -> MutexGuard<'_, SpotPool> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolHandle")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_ticket_reserves_spot() {
        let handle = PoolHandle::new(SpotPool::create(VehicleCategory::Car, 2));
        let ticket = handle
            .issue_ticket(TicketNumber(1), Vehicle::car("A"), 0, BillingStrategy::hourly())
            .unwrap();
        assert_eq!(ticket.spot_id(), SpotId(1));
        assert_eq!(handle.occupancy().occupied, 1);
        let occupant = handle.inspect(|pool| pool.spot(SpotId(1)).and_then(|s| s.occupant().cloned()));
        assert_eq!(occupant, Some(Vehicle::car("A")));
    }

    #[test]
    fn test_clones_share_one_pool() {
        let handle = PoolHandle::new(SpotPool::create(VehicleCategory::Bike, 1));
        let other = handle.clone();
        let separate = PoolHandle::new(SpotPool::create(VehicleCategory::Bike, 1));
        assert!(handle.is_same_pool(&other));
        assert!(!handle.is_same_pool(&separate));

        let _ticket = handle
            .issue_ticket(TicketNumber(1), Vehicle::bike("B"), 0, BillingStrategy::hourly())
            .unwrap();
        assert!(other.inspect(SpotPool::is_full));
    }
}
