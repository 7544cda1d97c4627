//! Parking spot

use parkade_types::{SpotId, Vehicle, VehicleCategory};
use serde::Serialize;

/// A single spot. It is occupied exactly when it holds an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spot {
    id: SpotId,
    category: VehicleCategory,
    occupant: Option<Vehicle>,
}

impl Spot {
    pub(crate) fn new(id: SpotId, category: VehicleCategory) -> Self {
        Self {
            id,
            category,
            occupant: None,
        }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Caller must have checked that the spot is free
    pub(crate) fn occupy(&mut self, vehicle: Vehicle) {
        self.occupant = Some(vehicle);
    }

    pub(crate) fn vacate(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}
