use super::aircraft_errors::AircraftError;
use crate::constants::G0;
use crate::models::aircraft::AircraftProperties;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const DEFAULT_NAME: &str = "Unknown aircraft";
const DEFAULT_MAX_SPEED: f64 = 300.0;
const DEFAULT_MAX_ALTITUDE: f64 = 10_000.0;
const DEFAULT_FUEL_CAPACITY: f64 = 5_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSpec {
    pub name: String,
    pub mass: f64,                 // kg
    pub wing_area: f64,            // m²
    pub cx: f64,                   // drag coefficient
    pub cy: f64,                   // lift coefficient
    pub max_thrust: f64,           // N
    pub specific_consumption: f64, // kg/(N·h)
    pub max_speed: f64,            // m/s
    pub max_altitude: f64,         // m
    pub fuel_capacity: f64,        // kg
}

impl Default for AircraftSpec {
    fn default() -> Self {
        AircraftSpec {
            name: DEFAULT_NAME.to_string(),
            mass: 0.0,
            wing_area: 0.0,
            cx: 0.0,
            cy: 0.0,
            max_thrust: 0.0,
            specific_consumption: 0.0,
            max_speed: DEFAULT_MAX_SPEED,
            max_altitude: DEFAULT_MAX_ALTITUDE,
            fuel_capacity: DEFAULT_FUEL_CAPACITY,
        }
    }
}

impl AircraftSpec {
    /// Reference light aircraft, identical to the sample parameter file.
    pub fn light_aircraft() -> Self {
        AircraftSpec {
            name: "Light aircraft".to_string(),
            mass: 18_400.0,
            wing_area: 62.0,
            cx: 0.02,
            cy: 3.45,
            max_thrust: 14_500.0,
            specific_consumption: 0.75,
            max_speed: 280.0,
            max_altitude: 8_500.0,
            fuel_capacity: 4_500.0,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AircraftError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let spec = Self::from_reader(file)?;
        info!(
            "Aircraft parameters loaded from {}: {}",
            path.display(),
            spec.name
        );
        Ok(spec)
    }

    /// Parses `key=value` lines. `#` lines are comments, lines without `=` are ignored
    /// and unknown keys only produce a warning.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AircraftError> {
        let mut spec = AircraftSpec::default();

        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(AircraftError::Read)? == 0 {
                break;
            }
            line_number += 1;

            // Legacy-encoded comments and names must not abort the load
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            let number = || -> Result<f64, AircraftError> {
                match value.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(AircraftError::InvalidValue {
                        key: key.to_string(),
                        line: line_number,
                        value: value.to_string(),
                    }),
                }
            };

            match key {
                "name" => spec.name = value.to_string(),
                "mass" => spec.mass = number()?,
                "wing_area" => spec.wing_area = number()?,
                "Cx" => spec.cx = number()?,
                "Cy" => spec.cy = number()?,
                "max_thrust" => spec.max_thrust = number()?,
                "specific_consumption" => spec.specific_consumption = number()?,
                "max_speed" => spec.max_speed = number()?,
                "max_altitude" => spec.max_altitude = number()?,
                "fuel_capacity" => spec.fuel_capacity = number()?,
                _ => warn!("Unknown aircraft parameter '{}' at line {}", key, line_number),
            }
        }

        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<(), AircraftError> {
        if self.mass > 0.0 && self.wing_area > 0.0 && self.max_thrust > 0.0 {
            Ok(())
        } else {
            Err(AircraftError::MissingParameters)
        }
    }

    /// Wing loading in kg/m².
    pub fn wing_loading(&self) -> f64 {
        self.mass / self.wing_area
    }

    pub fn thrust_to_weight(&self) -> f64 {
        self.max_thrust / (self.mass * G0)
    }

    /// True when installed thrust exceeds weight, i.e. no take-off run is needed.
    pub fn can_take_off_vertically(&self) -> bool {
        self.thrust_to_weight() > 1.0
    }
}

impl AircraftProperties for AircraftSpec {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn wing_area(&self) -> f64 {
        self.wing_area
    }

    fn drag_coefficient(&self) -> f64 {
        self.cx
    }

    fn lift_coefficient(&self) -> f64 {
        self.cy
    }

    fn max_thrust(&self) -> f64 {
        self.max_thrust
    }

    fn specific_consumption(&self) -> f64 {
        self.specific_consumption
    }
}
