//! Parking ticket lifecycle: Open -> Closed

use std::fmt;

use parkade_types::{
    Fee, ParkingError, SpotId, Timestamp, TicketNumber, Vehicle, VehicleCategory,
};
use serde::Serialize;

use super::pool_handle::PoolHandle;
use super::receipt::Receipt;
use crate::service::BillingStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketState {
    Open,
    Closed,
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketState::Open => write!(f, "open"),
            TicketState::Closed => write!(f, "closed"),
        }
    }
}

/// Proof of occupancy for one reservation.
///
/// Not `Clone`: a single value stands for each reserved spot, so the spot
/// can only be released once. The ticket is also the only way to release
/// it: dropping an open ticket leaves its spot occupied for the life of the
/// lot.
#[must_use = "dropping an open ticket leaves its spot occupied"]
#[derive(Debug)]
pub struct Ticket {
    number: TicketNumber,
    vehicle: Vehicle,
    pool: PoolHandle,
    spot: SpotId,
    entry_time: Timestamp,
    exit_time: Option<Timestamp>,
    billing: BillingStrategy,
}

impl Ticket {
    pub(crate) fn open(
        number: TicketNumber,
        vehicle: Vehicle,
        pool: PoolHandle,
        spot: SpotId,
        entry_time: Timestamp,
        billing: BillingStrategy,
    ) -> Self {
        Self {
            number,
            vehicle,
            pool,
            spot,
            entry_time,
            exit_time: None,
            billing,
        }
    }

    pub fn number(&self) -> TicketNumber {
        self.number
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn spot_id(&self) -> SpotId {
        self.spot
    }

    pub fn category(&self) -> VehicleCategory {
        self.pool.category()
    }

    pub fn entry_time(&self) -> Timestamp {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<Timestamp> {
        self.exit_time
    }

    pub fn billing(&self) -> BillingStrategy {
        self.billing
    }

    pub fn state(&self) -> TicketState {
        match self.exit_time {
            None => TicketState::Open,
            Some(_) => TicketState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == TicketState::Open
    }

    /// Whether this ticket holds a spot in `pool`
    pub fn belongs_to(&self, pool: &PoolHandle) -> bool {
        self.pool.is_same_pool(pool)
    }

    /// Close the ticket and give the spot back to its pool.
    ///
    /// A closed ticket rejects further exits and keeps its recorded exit time.
    pub fn exit(&mut self, exit_time: Timestamp) -> Result<(), ParkingError> {
        if self.exit_time.is_some() {
            return Err(ParkingError::TicketAlreadyClosed(self.number));
        }
        self.pool.release(self.spot);
        self.exit_time = Some(exit_time);
        Ok(())
    }

    pub fn fee(&self) -> Result<Fee, ParkingError> {
        let exit_time = self
            .exit_time
            .ok_or(ParkingError::TicketNotClosed(self.number))?;
        Ok(self.billing.calculate_fee(self.entry_time, exit_time))
    }

    pub fn receipt(&self) -> Result<Receipt, ParkingError> {
        let exit_time = self
            .exit_time
            .ok_or(ParkingError::TicketNotClosed(self.number))?;
        Ok(Receipt {
            ticket: self.number,
            plate: self.vehicle.plate().to_string(),
            category: self.category(),
            spot: self.spot,
            entry_time: self.entry_time,
            exit_time,
            billing: self.billing.kind(),
            fee: self.billing.calculate_fee(self.entry_time, exit_time),
        })
    }
}
