use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbState {
    pub time: f64,      // s
    pub altitude: f64,  // m
    pub velocity: f64,  // m/s, along the flight path
    pub distance: f64,  // m, horizontal
    pub fuel_used: f64, // kg
    pub step: usize,
}

impl ClimbState {
    pub fn new(altitude: f64, velocity: f64) -> Self {
        ClimbState {
            time: 0.0,
            altitude,
            velocity,
            distance: 0.0,
            fuel_used: 0.0,
            step: 0,
        }
    }

    pub fn snapshot(&self) -> TrajectorySample {
        TrajectorySample::from(self)
    }
}

/// One reported point of a climb. Field order matches the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
    #[serde(rename = "fuelUsed")]
    pub fuel_used: f64,
    pub distance: f64,
}

impl From<&ClimbState> for TrajectorySample {
    fn from(state: &ClimbState) -> Self {
        TrajectorySample {
            time: state.time,
            altitude: state.altitude,
            velocity: state.velocity,
            fuel_used: state.fuel_used,
            distance: state.distance,
        }
    }
}
