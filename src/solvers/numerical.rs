use crate::errors::{ensure_count, Result, SimulationError};
use crate::integrators::{Euler, Integrator, RK4};
use crate::models::{DataPoint, FlightState, RocketParameters, SimulationResult};
use crate::physics::dynamics::PhysicsModel;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    Euler,
    #[serde(rename = "rk4")]
    #[value(name = "rk4")]
    RungeKutta4,
}

impl IntegrationMethod {
    /// Advances `(t, v, m)` by one step of size `dt`.
    pub fn step(
        &self,
        model: PhysicsModel<'_>,
        time: f64,
        velocity: f64,
        mass: f64,
        dt: f64,
    ) -> (f64, f64, f64) {
        let state = FlightState::new(velocity, mass);
        let next = match self {
            IntegrationMethod::Euler => Euler::new(model).integrate(&state, dt),
            IntegrationMethod::RungeKutta4 => RK4::new(model).integrate(&state, dt),
        };
        (time + dt, next.velocity(), next.mass())
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationMethod::Euler => write!(f, "Euler method"),
            IntegrationMethod::RungeKutta4 => write!(f, "Runge-Kutta 4"),
        }
    }
}

/// Fixed-step time marching over the burn interval.
pub struct NumericalSolver<'a> {
    model: PhysicsModel<'a>,
}

impl<'a> NumericalSolver<'a> {
    pub fn new(parameters: &'a RocketParameters) -> Self {
        Self {
            model: PhysicsModel::new(parameters),
        }
    }

    pub fn solve_euler(&self, steps: usize) -> Result<SimulationResult> {
        self.solve(IntegrationMethod::Euler, steps)
    }

    pub fn solve_rk4(&self, steps: usize) -> Result<SimulationResult> {
        self.solve(IntegrationMethod::RungeKutta4, steps)
    }

    /// Integrates from rest at full mass to burnout, returning `steps + 1` points.
    pub fn solve(&self, method: IntegrationMethod, steps: usize) -> Result<SimulationResult> {
        ensure_count("steps", steps)?;

        let dt = self.model.burn_time() / steps as f64;
        let initial = self.model.initial_state();
        let (mut t, mut v, mut m) = (0.0, initial.velocity(), initial.mass());

        let mut data = Vec::with_capacity(steps + 1);
        data.push(DataPoint::new(t, v, m));

        for _ in 0..steps {
            (t, v, m) = method.step(self.model, t, v, m, dt);
            if !v.is_finite() {
                return Err(SimulationError::NumericallyUnstable { time: t, value: v });
            }
            data.push(DataPoint::new(t, v, m));
        }

        SimulationResult::new(data, method.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rocket::AussieInvader5R;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn reference() -> RocketParameters {
        RocketParameters::from_properties(&AussieInvader5R).unwrap()
    }

    #[test_case(IntegrationMethod::Euler; "euler")]
    #[test_case(IntegrationMethod::RungeKutta4; "rk4")]
    fn test_point_count_and_endpoints(method: IntegrationMethod) {
        let parameters = reference();
        let result = NumericalSolver::new(&parameters).solve(method, 50).unwrap();

        assert_eq!(result.get_data().len(), 51);
        assert_eq!(result.get_data()[0], DataPoint::new(0.0, 0.0, 9100.0));

        let last = result.final_point();
        assert_abs_diff_eq!(last.mass, 6300.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last.time, 2800.0 / 130.0, epsilon = 1e-9);
        assert_eq!(result.get_method_name(), method.to_string());
    }

    #[test]
    fn test_euler_first_step() {
        let parameters = reference();
        let result = NumericalSolver::new(&parameters).solve_euler(50).unwrap();
        let first = result.get_data()[1];

        assert_abs_diff_eq!(first.time, 0.4307692307692308, epsilon = 1e-12);
        assert_abs_diff_eq!(first.velocity, 7.425538461538461, epsilon = 1e-9);
        assert_abs_diff_eq!(first.mass, 9044.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rk4_single_step_over_whole_burn() {
        let parameters = reference();
        let result = NumericalSolver::new(&parameters).solve_rk4(1).unwrap();

        assert_eq!(result.get_data().len(), 2);
        assert_abs_diff_eq!(result.final_point().velocity, 445.28503954751443, epsilon = 1e-6);
    }

    #[test]
    fn test_rk4_mass_advances_linearly() {
        let parameters = reference();
        let model = PhysicsModel::new(&parameters);
        let (t, _, m) = IntegrationMethod::RungeKutta4.step(model, 1.0, 50.0, 8970.0, 0.5);

        assert_eq!(t, 1.5);
        assert_abs_diff_eq!(m, 8905.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rk4_peak_close_to_euler_peak() {
        let parameters = reference();
        let solver = NumericalSolver::new(&parameters);
        let euler = solver.solve_euler(50).unwrap();
        let rk4 = solver.solve_rk4(50).unwrap();

        assert_abs_diff_eq!(euler.get_max_velocity(), 444.06872765315194, epsilon = 1e-6);
        assert_abs_diff_eq!(rk4.get_max_velocity(), 445.3911981665828, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let parameters = reference();
        let result = NumericalSolver::new(&parameters).solve_rk4(0);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { name: "steps", value: 0 })
        ));
    }

    #[test_case("euler", IntegrationMethod::Euler; "lowercase euler")]
    #[test_case("RK4", IntegrationMethod::RungeKutta4; "uppercase rk4")]
    fn test_parse_method(input: &str, expected: IntegrationMethod) {
        assert_eq!(IntegrationMethod::from_str(input, true).unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_method() {
        assert!(IntegrationMethod::from_str("midpoint", true).is_err());
    }

    #[test]
    fn test_excessive_drag_is_unstable() {
        // Drag overshoots hard enough on the first Euler step to blow up
        let parameters = RocketParameters::new(9100.0, 6300.0, 130.0, 1550.0, 1e6, 0.5, 9.81).unwrap();
        let result = NumericalSolver::new(&parameters).solve_euler(10);
        assert!(matches!(
            result,
            Err(SimulationError::NumericallyUnstable { .. })
        ));
    }

    #[test]
    fn test_oversized_step_count_rejected() {
        let parameters = reference();
        let result = NumericalSolver::new(&parameters).solve_rk4(usize::MAX);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { name: "steps", value: usize::MAX })
        ));
    }
}
