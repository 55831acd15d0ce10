pub const G0: f64 = 9.81; // Gravitational acceleration (m/s²)

// Atmosphere
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065; // K/m

// Aerodynamic model
pub const ANGLE_OF_ATTACK_FACTOR: f64 = 0.1; // Constant angle of attack scaling of Cy
pub const INDUCED_DRAG_FACTOR: f64 = 0.05;
pub const DYNAMIC_PRESSURE_FACTOR: f64 = 0.5;

// Propulsion
pub const CLIMB_THRUST_FRACTION: f64 = 0.8; // Fraction of max thrust held during climb
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Simulation defaults
pub const DEFAULT_TIME_STEP: f64 = 1.0; // s
pub const DEFAULT_MAX_STEPS: usize = 1000;
pub const DEFAULT_REPORT_INTERVAL: f64 = 10.0; // s

// Math
pub const PI: f64 = std::f64::consts::PI;
