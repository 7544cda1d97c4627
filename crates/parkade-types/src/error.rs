//! Error types for parkade

use thiserror::Error;

use crate::{SpotId, TicketNumber, VehicleCategory};

/// Errors raised by spot allocation and the ticket lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    #[error("No spot available for {category}")]
    NoSpotAvailable { category: VehicleCategory },

    /// Internal invariant violation; the lot manager never produces it
    #[error("Spot {spot} in the {category} pool is already occupied")]
    SpotAlreadyOccupied {
        category: VehicleCategory,
        spot: SpotId,
    },

    #[error("Spot {spot} does not exist in the {category} pool")]
    UnknownSpot {
        category: VehicleCategory,
        spot: SpotId,
    },

    #[error("A {vehicle} cannot take a spot in the {pool} pool")]
    CategoryMismatch {
        vehicle: VehicleCategory,
        pool: VehicleCategory,
    },

    #[error("Ticket {0} is already closed")]
    TicketAlreadyClosed(TicketNumber),

    #[error("Ticket {0} is still open")]
    TicketNotClosed(TicketNumber),

    #[error("Ticket {0} was not issued by this lot")]
    ForeignTicket(TicketNumber),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parking error: {0}")]
    Parking(#[from] ParkingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Lot layout error: {0}")]
    Layout(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

pub type Result<T> = std::result::Result<T, Error>;
