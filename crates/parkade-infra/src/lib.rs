//! Infrastructure layer - file formats around the lot engine

pub mod layout_loader;
pub mod receipt_csv;
pub mod scenario_csv;

pub use layout_loader::LotLayout;
pub use receipt_csv::{write_receipts, write_receipts_to};
pub use scenario_csv::{load_scenario, load_scenario_from_reader, ScenarioCsvError};
