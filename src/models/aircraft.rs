pub trait AircraftProperties {
    fn mass(&self) -> f64;
    fn wing_area(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn lift_coefficient(&self) -> f64;
    fn max_thrust(&self) -> f64;
    fn specific_consumption(&self) -> f64;
}
