pub mod climb;
pub mod climb_outcome;
pub mod simulation_errors;

pub use climb::{ClimbIntegrator, ClimbParameters, ClimbSamples, ClimbSummary, ClimbTrajectory};
pub use climb_outcome::ClimbOutcome;
pub use simulation_errors::SimulationError;
