//! Lot capacity per vehicle category

use parkade_types::VehicleCategory;
use serde::{Deserialize, Serialize};

/// Number of spots per category. Fixed for the lifetime of a lot.
///
/// A category left out when deserializing keeps its `Default` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotCapacity {
    pub cars: u32,
    pub bikes: u32,
    pub trucks: u32,
}

impl LotCapacity {
    pub fn new(cars: u32, bikes: u32, trucks: u32) -> Self {
        Self { cars, bikes, trucks }
    }

    pub fn for_category(&self, category: VehicleCategory) -> u32 {
        match category {
            VehicleCategory::Car => self.cars,
            VehicleCategory::Bike => self.bikes,
            VehicleCategory::Truck => self.trucks,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.cars) + u64::from(self.bikes) + u64::from(self.trucks)
    }
}

impl Default for LotCapacity {
    fn default() -> Self {
        Self::new(2, 2, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_category() {
        let capacity = LotCapacity::new(4, 6, 1);
        assert_eq!(capacity.for_category(VehicleCategory::Car), 4);
        assert_eq!(capacity.for_category(VehicleCategory::Bike), 6);
        assert_eq!(capacity.for_category(VehicleCategory::Truck), 1);
        assert_eq!(capacity.total(), 11);
    }

    #[test]
    fn test_missing_fields_keep_default_counts() {
        let capacity: LotCapacity = serde_json::from_str(r#"{"cars": 9}"#).unwrap();
        assert_eq!(capacity, LotCapacity::new(9, 2, 1));

        let explicit_zero: LotCapacity = serde_json::from_str(r#"{"trucks": 0}"#).unwrap();
        assert_eq!(explicit_zero, LotCapacity::new(2, 2, 0));
    }
}
