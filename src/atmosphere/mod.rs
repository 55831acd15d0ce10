pub mod atmosphere_errors;
pub mod table;

pub use atmosphere_errors::AtmosphereError;
pub use table::{standard_temperature, AtmosphereSample, AtmosphereTable};
