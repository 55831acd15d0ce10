use crate::constants::{CLIMB_THRUST_FRACTION, SECONDS_PER_HOUR};
use crate::models::aircraft::AircraftProperties;

/// Thrust held for the whole climb; there is no throttle loop.
pub fn climb_thrust<T: AircraftProperties>(aircraft: &T) -> f64 {
    aircraft.max_thrust() * CLIMB_THRUST_FRACTION
}

/// Fuel burned in kg over `dt` seconds. Specific consumption is in kg/(N·h).
pub fn fuel_consumption<T: AircraftProperties>(aircraft: &T, thrust: f64, dt: f64) -> f64 {
    thrust * aircraft.specific_consumption() * dt / SECONDS_PER_HOUR
}
