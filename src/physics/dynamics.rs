use super::aerodynamics::{drag_force, lift_force};
use super::propulsion::{climb_thrust, fuel_consumption};
use crate::atmosphere::{AtmosphereError, AtmosphereTable};
use crate::constants::{G0, PI};
use crate::integrators::euler::SteppedSystem;
use crate::models::aircraft::AircraftProperties;
use crate::models::state::ClimbState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbForces {
    pub density: f64,      // kg/m³
    pub lift: f64,         // N
    pub drag: f64,         // N
    pub thrust: f64,       // N
    pub acceleration: f64, // m/s², along the flight path
}

/// Point-mass climb along a straight path at a fixed flight-path angle.
pub struct ClimbDynamics<'a, T: AircraftProperties> {
    aircraft: &'a T,
    atmosphere: &'a AtmosphereTable,
    sin_angle: f64,
    cos_angle: f64,
    thrust: f64,
}

impl<'a, T: AircraftProperties> ClimbDynamics<'a, T> {
    pub fn new(aircraft: &'a T, atmosphere: &'a AtmosphereTable, climb_angle_degrees: f64) -> Self {
        let climb_angle_rad = climb_angle_degrees * PI / 180.0;
        Self {
            aircraft,
            atmosphere,
            sin_angle: climb_angle_rad.sin(),
            cos_angle: climb_angle_rad.cos(),
            thrust: climb_thrust(aircraft),
        }
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }
}

impl<T: AircraftProperties> SteppedSystem for ClimbDynamics<'_, T> {
    type State = ClimbState;
    type Forces = ClimbForces;
    type Error = AtmosphereError;

    fn forces(&self, state: &ClimbState) -> Result<ClimbForces, AtmosphereError> {
        let density = self.atmosphere.density_at(state.altitude)?;
        let lift = lift_force(self.aircraft, density, state.velocity);
        let drag = drag_force(self.aircraft, density, state.velocity);
        let acceleration = (self.thrust - drag) / self.aircraft.mass() - G0 * self.sin_angle;

        Ok(ClimbForces {
            density,
            lift,
            drag,
            thrust: self.thrust,
            acceleration,
        })
    }

    fn kick(&self, state: &mut ClimbState, forces: &ClimbForces, dt: f64) {
        state.velocity += forces.acceleration * dt;
    }

    fn drift(&self, state: &mut ClimbState, forces: &ClimbForces, dt: f64) {
        state.altitude += state.velocity * self.sin_angle * dt;
        state.distance += state.velocity * self.cos_angle * dt;
        state.fuel_used += fuel_consumption(self.aircraft, forces.thrust, dt);
        state.time += dt;
        state.step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::AtmosphereSample;
    use crate::config::aircraft::AircraftSpec;
    use crate::integrators::euler::SemiImplicitEuler;
    use approx::assert_abs_diff_eq;

    fn uniform_atmosphere(density: f64) -> AtmosphereTable {
        AtmosphereTable::from_samples(vec![AtmosphereSample::with_standard_temperature(
            0.0, density, 101325.0,
        )])
        .unwrap()
    }

    #[test]
    fn level_flight_in_vacuum_accelerates_on_thrust_alone() {
        let aircraft = AircraftSpec::light_aircraft();
        let atmosphere = uniform_atmosphere(0.0);
        let dynamics = ClimbDynamics::new(&aircraft, &atmosphere, 0.0);
        let forces = dynamics.forces(&ClimbState::new(0.0, 100.0)).unwrap();
        assert_eq!(forces.drag, 0.0);
        assert_abs_diff_eq!(forces.acceleration, 11_600.0 / 18_400.0, epsilon = 1e-12);
    }

    #[test]
    fn thrust_is_fixed_at_construction() {
        let aircraft = AircraftSpec::light_aircraft();
        let atmosphere = uniform_atmosphere(1.0);
        let dynamics = ClimbDynamics::new(&aircraft, &atmosphere, 15.0);
        assert_abs_diff_eq!(dynamics.thrust(), 11_600.0, epsilon = 1e-9);

        let integrator = SemiImplicitEuler::new(dynamics);
        assert_abs_diff_eq!(integrator.system().thrust(), 11_600.0, epsilon = 1e-9);
    }

    #[test]
    fn one_step_matches_hand_computation() {
        let aircraft = AircraftSpec::light_aircraft();
        let atmosphere = uniform_atmosphere(1.0);
        let integrator = SemiImplicitEuler::new(ClimbDynamics::new(&aircraft, &atmosphere, 30.0));
        let next = integrator.integrate(&ClimbState::new(0.0, 100.0), 1.0).unwrap();

        let drag = 0.5 * 100.0 * 100.0 * 62.0 * (0.02 + 0.05 * 0.345 * 0.345);
        let accel = (11_600.0 - drag) / 18_400.0 - 9.81 * 0.5;
        let v = 100.0 + accel;

        assert_abs_diff_eq!(next.velocity, v, epsilon = 1e-9);
        assert_abs_diff_eq!(next.altitude, v * 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(next.distance, v * 3f64.sqrt() / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.fuel_used, 11_600.0 * 0.75 / 3600.0, epsilon = 1e-12);
        assert_eq!(next.time, 1.0);
        assert_eq!(next.step, 1);
    }

    #[test]
    fn unloaded_atmosphere_fails_force_evaluation() {
        let aircraft = AircraftSpec::light_aircraft();
        let atmosphere = AtmosphereTable::new();
        let dynamics = ClimbDynamics::new(&aircraft, &atmosphere, 10.0);
        assert!(matches!(
            dynamics.forces(&ClimbState::new(0.0, 100.0)),
            Err(AtmosphereError::NotLoaded)
        ));
    }
}
