pub mod euler;
pub mod rk4;

pub use euler::Euler;
pub use rk4::RK4;

use crate::physics::dynamics::EquationsOfMotion;
use std::ops::{Add, Mul};

/// Vector-space operations a fixed-step scheme needs from a state.
pub trait IntegrationState: Clone + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<S> IntegrationState for S where S: Clone + Add<Output = S> + Mul<f64, Output = S> {}

/// One explicit step of size `dt` from `state`.
pub trait Integrator {
    type Model: EquationsOfMotion;

    fn integrate(
        &self,
        state: &<Self::Model as EquationsOfMotion>::State,
        dt: f64,
    ) -> <Self::Model as EquationsOfMotion>::State;
}
