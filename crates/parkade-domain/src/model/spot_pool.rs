//! Fixed-capacity pool of same-category spots

use parkade_types::{ParkingError, SpotId, Vehicle, VehicleCategory};
use serde::Serialize;
use tracing::debug;

use super::spot::Spot;

/// Point-in-time occupancy of one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolOccupancy {
    pub category: VehicleCategory,
    pub capacity: u32,
    pub occupied: u32,
}

impl PoolOccupancy {
    pub fn free(&self) -> u32 {
        self.capacity - self.occupied
    }
}

/// Spots of one category with ids `1..=capacity`, stored in id order
#[derive(Debug, Clone)]
pub struct SpotPool {
    category: VehicleCategory,
    spots: Vec<Spot>,
}

impl SpotPool {
    /// Build `count` free spots numbered from 1. An empty pool is valid.
    pub fn create(category: VehicleCategory, count: u32) -> Self {
        let spots = (1..=count)
            .map(|n| Spot::new(SpotId(n), category))
            .collect();
        Self { category, spots }
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn capacity(&self) -> u32 {
        self.spots.len() as u32
    }

    pub fn occupied_count(&self) -> u32 {
        self.spots.iter().filter(|s| s.is_occupied()).count() as u32
    }

    pub fn free_count(&self) -> u32 {
        self.capacity() - self.occupied_count()
    }

    pub fn is_full(&self) -> bool {
        self.spots.iter().all(Spot::is_occupied)
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.index_of(id).map(|i| &self.spots[i])
    }

    pub fn occupancy(&self) -> PoolOccupancy {
        PoolOccupancy {
            category: self.category,
            capacity: self.capacity(),
            occupied: self.occupied_count(),
        }
    }

    /// Lowest-numbered free spot
    pub fn find_free_spot(&self) -> Result<SpotId, ParkingError> {
        self.spots
            .iter()
            .find(|s| s.is_free())
            .map(Spot::id)
            .ok_or(ParkingError::NoSpotAvailable {
                category: self.category,
            })
    }

    /// Put `vehicle` into a free spot of this pool
    pub fn assign(&mut self, id: SpotId, vehicle: Vehicle) -> Result<(), ParkingError> {
        if vehicle.category() != self.category {
            return Err(ParkingError::CategoryMismatch {
                vehicle: vehicle.category(),
                pool: self.category,
            });
        }
        let index = self.index_of(id).ok_or(ParkingError::UnknownSpot {
            category: self.category,
            spot: id,
        })?;
        let spot = &mut self.spots[index];
        if spot.is_occupied() {
            return Err(ParkingError::SpotAlreadyOccupied {
                category: self.category,
                spot: id,
            });
        }
        spot.occupy(vehicle);
        Ok(())
    }

    /// Find and assign in one step. Nothing changes on failure.
    pub fn reserve(&mut self, vehicle: Vehicle) -> Result<SpotId, ParkingError> {
        let id = self.find_free_spot()?;
        self.assign(id, vehicle)?;
        Ok(id)
    }

    /// Free a spot and hand back whoever was in it.
    ///
    /// Releasing a free or unknown spot does nothing.
    pub fn release(&mut self, id: SpotId) -> Option<Vehicle> {
        let index = self.index_of(id)?;
        let vehicle = self.spots[index].vacate();
        match &vehicle {
            Some(v) => debug!(category = %self.category, spot = %id, plate = v.plate(), "spot released"),
            None => debug!(category = %self.category, spot = %id, "release of a free spot ignored"),
        }
        vehicle
    }

    fn index_of(&self, id: SpotId) -> Option<usize> {
        let index = (id.get() as usize).checked_sub(1)?;
        (index < self.spots.len()).then_some(index)
    }
}
