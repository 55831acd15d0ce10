pub mod report;
pub mod trajectory_csv;

pub use report::{AircraftReport, AtmosphereReport};
pub use trajectory_csv::{write_trajectory, write_trajectory_file};
