pub mod aircraft;
pub mod aircraft_errors;
pub mod samples;

pub use aircraft::AircraftSpec;
pub use aircraft_errors::AircraftError;
