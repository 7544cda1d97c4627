//! Domain model types

pub mod capacity;
pub mod pool_handle;
pub mod receipt;
pub mod scenario;
pub mod spot;
pub mod spot_pool;
pub mod ticket;

pub use capacity::LotCapacity;
pub use pool_handle::PoolHandle;
pub use receipt::Receipt;
pub use scenario::ScenarioEvent;
pub use spot::Spot;
pub use spot_pool::{PoolOccupancy, SpotPool};
pub use ticket::{Ticket, TicketState};
