//! Aircraft climb simulation through a tabulated atmosphere.

pub mod atmosphere;
pub mod config;
pub mod constants;
pub mod integrators;
pub mod models;
pub mod output;
pub mod physics;
pub mod simulation;

pub use atmosphere::{AtmosphereError, AtmosphereSample, AtmosphereTable};
pub use config::{AircraftError, AircraftSpec};
pub use models::{AircraftProperties, ClimbState, TrajectorySample};
pub use simulation::{
    ClimbIntegrator, ClimbOutcome, ClimbParameters, ClimbSummary, ClimbTrajectory,
    SimulationError,
};
