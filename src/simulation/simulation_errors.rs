use crate::atmosphere::AtmosphereError;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum SimulationError {
    Atmosphere(AtmosphereError),
    InvalidParameter(&'static str),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Atmosphere(e) => write!(f, "Atmosphere error: {}", e),
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid climb parameter: {}", msg),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulationError::Atmosphere(e) => Some(e),
            SimulationError::InvalidParameter(_) => None,
        }
    }
}

impl From<AtmosphereError> for SimulationError {
    fn from(err: AtmosphereError) -> Self {
        SimulationError::Atmosphere(err)
    }
}
