use super::{IntegrationState, Integrator};
use crate::physics::dynamics::EquationsOfMotion;

/// First-order explicit Euler.
pub struct Euler<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> Euler<T> {
    pub fn new(eom: T) -> Self {
        Euler { eom }
    }
}

impl<T: EquationsOfMotion> Integrator for Euler<T>
where
    T::State: IntegrationState,
{
    type Model = T;

    fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let slope = self.eom.compute_derivative(state);
        state.clone() + slope * dt
    }
}
