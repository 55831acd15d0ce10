use super::climb_outcome::ClimbOutcome;
use super::simulation_errors::SimulationError;
use crate::atmosphere::{AtmosphereError, AtmosphereTable};
use crate::constants::{DEFAULT_MAX_STEPS, DEFAULT_REPORT_INTERVAL, DEFAULT_TIME_STEP};
use crate::integrators::euler::SemiImplicitEuler;
use crate::models::aircraft::AircraftProperties;
use crate::models::state::{ClimbState, TrajectorySample};
use crate::physics::dynamics::ClimbDynamics;
use log::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbParameters {
    pub initial_altitude: f64,    // m
    pub target_altitude: f64,     // m
    pub initial_velocity: f64,    // m/s
    pub climb_angle_degrees: f64, // deg
    pub dt: f64,                  // s
    pub max_steps: usize,
    pub report_interval: f64, // s
}

impl Default for ClimbParameters {
    fn default() -> Self {
        ClimbParameters {
            initial_altitude: 500.0,
            target_altitude: 5000.0,
            initial_velocity: 100.0,
            climb_angle_degrees: 15.0,
            dt: DEFAULT_TIME_STEP,
            max_steps: DEFAULT_MAX_STEPS,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl ClimbParameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimulationError::InvalidParameter("time step must be positive"));
        }
        if !(self.report_interval.is_finite() && self.report_interval > 0.0) {
            return Err(SimulationError::InvalidParameter(
                "report interval must be positive",
            ));
        }
        if !self.initial_altitude.is_finite() || !self.target_altitude.is_finite() {
            return Err(SimulationError::InvalidParameter("altitudes must be finite"));
        }
        if !self.initial_velocity.is_finite() {
            return Err(SimulationError::InvalidParameter("initial velocity must be finite"));
        }
        if !self.climb_angle_degrees.is_finite() {
            return Err(SimulationError::InvalidParameter("climb angle must be finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimbSummary {
    pub initial_altitude: f64,
    pub target_altitude: f64,
    pub steps: usize,
    pub total_time: f64,
    pub final_altitude: f64,
    pub final_velocity: f64,
    pub total_fuel: f64,
    pub total_distance: f64,
    pub average_climb_rate: f64,
    pub max_velocity: f64,
    pub max_climb_rate: f64,
    pub outcome: ClimbOutcome,
}

impl ClimbSummary {
    pub fn reached_target(&self) -> bool {
        self.outcome == ClimbOutcome::TargetReached
    }
}

#[derive(Debug, Clone)]
pub struct ClimbTrajectory {
    pub samples: Vec<TrajectorySample>,
    pub summary: ClimbSummary,
}

/// Fixed-step climb from an initial altitude and speed to a target altitude.
///
/// The run stops when the target is reached or after `max_steps` steps, whichever
/// comes first. Stopping on the step cap is not an error; it shows up as
/// [`ClimbOutcome::StepLimitReached`] with a final altitude below the target.
pub struct ClimbIntegrator<'a, T: AircraftProperties> {
    aircraft: &'a T,
    atmosphere: &'a AtmosphereTable,
    params: ClimbParameters,
}

impl<'a, T: AircraftProperties> ClimbIntegrator<'a, T> {
    pub fn new(
        aircraft: &'a T,
        atmosphere: &'a AtmosphereTable,
        params: ClimbParameters,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        if !atmosphere.is_loaded() {
            return Err(AtmosphereError::NotLoaded.into());
        }
        Ok(Self {
            aircraft,
            atmosphere,
            params,
        })
    }

    pub fn parameters(&self) -> &ClimbParameters {
        &self.params
    }

    /// Lazily steps the climb, yielding a sample at each reporting interval and
    /// always the final state. Every call starts a fresh run.
    pub fn samples(&self) -> ClimbSamples<'a, T> {
        debug!(
            "Starting climb: {:.1} m -> {:.1} m at {:.1} deg, v0 = {:.1} m/s",
            self.params.initial_altitude,
            self.params.target_altitude,
            self.params.climb_angle_degrees,
            self.params.initial_velocity
        );
        let integrator = SemiImplicitEuler::new(ClimbDynamics::new(
            self.aircraft,
            self.atmosphere,
            self.params.climb_angle_degrees,
        ));
        debug!("Climb thrust held at {:.1} N", integrator.system().thrust());
        ClimbSamples {
            integrator,
            params: self.params,
            state: ClimbState::new(self.params.initial_altitude, self.params.initial_velocity),
            last_reported_step: None,
            finished: false,
        }
    }

    pub fn run(&self) -> Result<ClimbTrajectory, SimulationError> {
        let mut iter = self.samples();
        let samples = iter.by_ref().collect::<Result<Vec<_>, _>>()?;
        let summary = summarize(&self.params, iter.state(), &samples);

        if !summary.final_velocity.is_finite() {
            warn!("Climb state diverged: final velocity is {}", summary.final_velocity);
        } else if !summary.reached_target() {
            warn!(
                "Climb stopped after {} steps at {:.1} m, below target {:.1} m",
                summary.steps, summary.final_altitude, summary.target_altitude
            );
        }

        Ok(ClimbTrajectory { samples, summary })
    }
}

pub struct ClimbSamples<'a, T: AircraftProperties> {
    integrator: SemiImplicitEuler<ClimbDynamics<'a, T>>,
    params: ClimbParameters,
    state: ClimbState,
    last_reported_step: Option<usize>,
    finished: bool,
}

impl<T: AircraftProperties> ClimbSamples<'_, T> {
    /// Current simulation state; the final state once the iterator is exhausted.
    pub fn state(&self) -> &ClimbState {
        &self.state
    }

    fn is_done(&self) -> bool {
        self.state.altitude >= self.params.target_altitude
            || self.state.step >= self.params.max_steps
    }

    fn on_report_boundary(&self) -> bool {
        self.state.time % self.params.report_interval < self.params.dt
    }
}

impl<T: AircraftProperties> Iterator for ClimbSamples<'_, T> {
    type Item = Result<TrajectorySample, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if self.is_done() {
                self.finished = true;
                // The final state was already reported if the last step hit a boundary
                if self.last_reported_step == Some(self.state.step) {
                    return None;
                }
                return Some(Ok(self.state.snapshot()));
            }

            match self.integrator.integrate(&self.state, self.params.dt) {
                Ok(next) => self.state = next,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
            trace!(
                "step {}: t = {:.1} s, h = {:.2} m, v = {:.2} m/s",
                self.state.step,
                self.state.time,
                self.state.altitude,
                self.state.velocity
            );

            if self.on_report_boundary() {
                self.last_reported_step = Some(self.state.step);
                return Some(Ok(self.state.snapshot()));
            }
        }
    }
}

fn summarize(
    params: &ClimbParameters,
    final_state: &ClimbState,
    samples: &[TrajectorySample],
) -> ClimbSummary {
    let total_time = final_state.time;
    let average_climb_rate = if total_time > 0.0 {
        (final_state.altitude - params.initial_altitude) / total_time
    } else {
        0.0
    };

    let mut max_velocity = params.initial_velocity;
    let mut max_climb_rate = 0.0_f64;
    let mut previous = (0.0, params.initial_altitude);
    for sample in samples {
        max_velocity = max_velocity.max(sample.velocity);
        let dt = sample.time - previous.0;
        if dt > 0.0 {
            max_climb_rate = max_climb_rate.max((sample.altitude - previous.1) / dt);
        }
        previous = (sample.time, sample.altitude);
    }

    let outcome = if final_state.altitude >= params.target_altitude {
        ClimbOutcome::TargetReached
    } else {
        ClimbOutcome::StepLimitReached
    };

    ClimbSummary {
        initial_altitude: params.initial_altitude,
        target_altitude: params.target_altitude,
        steps: final_state.step,
        total_time,
        final_altitude: final_state.altitude,
        final_velocity: final_state.velocity,
        total_fuel: final_state.fuel_used,
        total_distance: final_state.distance,
        average_climb_rate,
        max_velocity,
        max_climb_rate,
        outcome,
    }
}
