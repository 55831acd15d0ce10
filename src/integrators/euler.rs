/// A system advanced by semi-implicit Euler: forces are evaluated once per step,
/// velocities are updated first ("kick") and positions then move with the updated
/// velocities ("drift").
pub trait SteppedSystem {
    type State: Clone;
    type Forces;
    type Error;

    fn forces(&self, state: &Self::State) -> Result<Self::Forces, Self::Error>;
    fn kick(&self, state: &mut Self::State, forces: &Self::Forces, dt: f64);
    fn drift(&self, state: &mut Self::State, forces: &Self::Forces, dt: f64);
}

pub struct SemiImplicitEuler<T: SteppedSystem> {
    system: T,
}

impl<T: SteppedSystem> SemiImplicitEuler<T> {
    pub fn new(system: T) -> Self {
        SemiImplicitEuler { system }
    }

    pub fn system(&self) -> &T {
        &self.system
    }

    pub fn integrate(&self, state: &T::State, dt: f64) -> Result<T::State, T::Error> {
        let forces = self.system.forces(state)?;
        let mut next = state.clone();
        self.system.kick(&mut next, &forces, dt);
        self.system.drift(&mut next, &forces, dt);
        Ok(next)
    }
}
