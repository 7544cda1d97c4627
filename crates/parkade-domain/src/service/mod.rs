//! Domain services

pub mod billing;

pub use billing::{BillingRates, BillingStrategy};
