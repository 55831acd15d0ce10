use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum AtmosphereError {
    SourceOpen(io::Error),
    Csv(csv::Error),
    NoValidRows,
    NotLoaded,
    MalformedRow { line: u64, reason: String },
}

impl fmt::Display for AtmosphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmosphereError::SourceOpen(e) => write!(f, "Cannot open atmosphere source: {}", e),
            AtmosphereError::Csv(e) => write!(f, "CSV parsing error: {}", e),
            AtmosphereError::NoValidRows => write!(f, "Atmosphere source contains no valid rows"),
            AtmosphereError::NotLoaded => write!(f, "Atmosphere table is not loaded"),
            AtmosphereError::MalformedRow { line, reason } => {
                write!(f, "Malformed atmosphere row at line {}: {}", line, reason)
            }
        }
    }
}

impl Error for AtmosphereError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AtmosphereError::SourceOpen(e) => Some(e),
            AtmosphereError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AtmosphereError {
    fn from(err: io::Error) -> Self {
        AtmosphereError::SourceOpen(err)
    }
}

impl From<csv::Error> for AtmosphereError {
    fn from(err: csv::Error) -> Self {
        AtmosphereError::Csv(err)
    }
}
