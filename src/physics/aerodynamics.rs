use crate::constants::{ANGLE_OF_ATTACK_FACTOR, DYNAMIC_PRESSURE_FACTOR, INDUCED_DRAG_FACTOR};
use crate::models::aircraft::AircraftProperties;

pub fn dynamic_pressure(density: f64, velocity: f64) -> f64 {
    DYNAMIC_PRESSURE_FACTOR * density * velocity * velocity
}

/// Lift at the fixed climb angle of attack. `Cy` is scaled by the constant
/// angle-of-attack factor rather than by a lift curve.
pub fn lift_force<T: AircraftProperties>(aircraft: &T, density: f64, velocity: f64) -> f64 {
    let q = dynamic_pressure(density, velocity);
    let cy = aircraft.lift_coefficient() * ANGLE_OF_ATTACK_FACTOR;
    q * aircraft.wing_area() * cy
}

/// Parasitic drag plus the simplified induced term `0.05 * (Cy * aoa)²`.
pub fn drag_force<T: AircraftProperties>(aircraft: &T, density: f64, velocity: f64) -> f64 {
    let q = dynamic_pressure(density, velocity);
    let cy = aircraft.lift_coefficient() * ANGLE_OF_ATTACK_FACTOR;
    let cx = aircraft.drag_coefficient() + INDUCED_DRAG_FACTOR * cy * cy;
    q * aircraft.wing_area() * cx
}
