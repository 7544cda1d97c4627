//! Domain layer: spot pools, the ticket lifecycle, and billing

pub mod model;
pub mod service;

pub use model::*;
pub use service::{BillingRates, BillingStrategy};
