pub mod aircraft;
pub mod state;

pub use aircraft::AircraftProperties;
pub use state::{ClimbState, TrajectorySample};
