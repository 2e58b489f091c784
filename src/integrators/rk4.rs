use super::{IntegrationState, Integrator};
use crate::physics::dynamics::EquationsOfMotion;

/// Classical fourth-order Runge-Kutta.
pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: IntegrationState,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    /// Slope at `state + slope * h`.
    fn stage(&self, state: &T::State, slope: &T::State, h: f64) -> T::State {
        self.eom.compute_derivative(&(state.clone() + slope.clone() * h))
    }
}

impl<T: EquationsOfMotion> Integrator for RK4<T>
where
    T::State: IntegrationState,
{
    type Model = T;

    fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let half = 0.5 * dt;

        let k1 = self.eom.compute_derivative(state);
        let k2 = self.stage(state, &k1, half);
        let k3 = self.stage(state, &k2, half);
        let k4 = self.stage(state, &k3, dt);

        let weighted = k1 + (k2 + k3) * 2.0 + k4;
        state.clone() + weighted * (dt / 6.0)
    }
}
