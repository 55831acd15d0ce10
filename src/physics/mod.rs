pub mod aerodynamics;
pub mod dynamics;
pub mod propulsion;
