use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum AircraftError {
    SourceOpen(io::Error),
    Read(io::Error),
    InvalidValue {
        key: String,
        line: usize,
        value: String,
    },
    MissingParameters,
}

impl fmt::Display for AircraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AircraftError::SourceOpen(e) => write!(f, "Cannot open aircraft source: {}", e),
            AircraftError::Read(e) => write!(f, "Failed to read aircraft source: {}", e),
            AircraftError::InvalidValue { key, line, value } => write!(
                f,
                "Invalid value '{}' for parameter '{}' at line {}",
                value, key, line
            ),
            AircraftError::MissingParameters => write!(
                f,
                "Aircraft parameters incomplete: mass, wing_area and max_thrust must be positive"
            ),
        }
    }
}

impl Error for AircraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AircraftError::SourceOpen(e) | AircraftError::Read(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AircraftError {
    fn from(err: io::Error) -> Self {
        AircraftError::SourceOpen(err)
    }
}
