//! Use cases built on the lot engine

mod lot_manager;
mod scenario_service;

pub use lot_manager::LotManager;
pub use scenario_service::{
    reference_scenario, run_scenario, ParkedVehicle, Rejection, ScenarioOptions, ScenarioReport,
};
