use crate::constants::{CONSTANT_RESOLUTION_TERMS, DENOMINATOR_EPSILON};
use crate::errors::{ensure_count, Result, SimulationError};
use crate::models::{DataPoint, RocketParameters, RocketProperties, SimulationResult};
use crate::physics::bessel::{y1, y1_prime, y2, y2_prime};
use crate::physics::dynamics::PhysicsModel;
use std::sync::OnceLock;

/// Closed-form burn trajectory evaluated through fractional-order Bessel-type
/// series.
///
/// Substituting `v = -(Q*tau / (2*BETA)) * y'/y` with
/// `tau = (2/Q) * sqrt(BETA*MU*G*m)` turns the velocity equation into a Bessel
/// equation of order `NU = 2*sqrt(BETA*U/Q)`, whose general solution is
/// `C*Y1 + Y2`. `C` is fixed by requiring `v(0) = 0`.
pub struct AnalyticalSolver<'a> {
    model: PhysicsModel<'a>,
    order: f64,
    constant: OnceLock<f64>,
}

impl<'a> AnalyticalSolver<'a> {
    /// Requires a positive drag coefficient.
    pub fn new(parameters: &'a RocketParameters) -> Self {
        let order = 2.0
            * (parameters.drag_coefficient() * parameters.exhaust_velocity()
                / parameters.mass_flow_rate())
            .sqrt();

        Self {
            model: PhysicsModel::new(parameters),
            order,
            constant: OnceLock::new(),
        }
    }

    /// Fractional order `NU` of the series.
    pub fn order(&self) -> f64 {
        self.order
    }

    /// Dimensionless series argument for a given remaining mass.
    pub fn tau(&self, mass: f64) -> f64 {
        let p = self.model.get_parameters();
        (2.0 / p.mass_flow_rate())
            * (p.drag_coefficient() * p.friction_coefficient() * mass * p.gravity()).sqrt()
    }

    /// Integration constant `C` from `v(0) = 0`, resolved on first use.
    ///
    /// Always uses `CONSTANT_RESOLUTION_TERMS` terms, whatever term count the
    /// trajectory itself is evaluated with.
    pub fn integration_constant(&self) -> f64 {
        *self.constant.get_or_init(|| {
            let tau0 = self.tau(self.model.get_parameters().initial_mass());
            let y1p = y1_prime(tau0, self.order, CONSTANT_RESOLUTION_TERMS);
            let y2p = y2_prime(tau0, self.order, CONSTANT_RESOLUTION_TERMS);
            -y2p / y1p
        })
    }

    /// Velocity at `time`; exactly zero outside the burn interval.
    pub fn velocity_at(&self, time: f64, terms: usize) -> Result<f64> {
        if !(0.0..=self.model.burn_time()).contains(&time) {
            return Ok(0.0);
        }
        self.velocity_in_burn(time, terms)
    }

    fn velocity_in_burn(&self, time: f64, terms: usize) -> Result<f64> {
        let p = self.model.get_parameters();
        let c = self.integration_constant();
        let tau = self.tau(self.model.mass_at(time));

        let numerator = c * y1_prime(tau, self.order, terms) + y2_prime(tau, self.order, terms);
        let denominator = c * y1(tau, self.order, terms) + y2(tau, self.order, terms);
        if denominator.is_nan() || denominator.abs() <= DENOMINATOR_EPSILON {
            return Err(SimulationError::NumericallyUnstable {
                time,
                value: denominator,
            });
        }

        let velocity =
            -(p.mass_flow_rate() * tau / (2.0 * p.drag_coefficient())) * (numerator / denominator);
        if !velocity.is_finite() {
            return Err(SimulationError::NumericallyUnstable {
                time,
                value: velocity,
            });
        }

        Ok(velocity)
    }

    /// Samples `plot_points + 1` uniformly spaced points over `[0, burn_time]`.
    pub fn solve(&self, terms: usize, plot_points: usize) -> Result<SimulationResult> {
        ensure_count("terms", terms)?;
        ensure_count("plot_points", plot_points)?;

        let burn_time = self.model.burn_time();
        let dt = burn_time / plot_points as f64;

        let mut data = Vec::with_capacity(plot_points + 1);
        for i in 0..=plot_points {
            // Keep the last sample inside the burn despite rounding
            let t = (i as f64 * dt).min(burn_time);
            let v = self.velocity_in_burn(t, terms)?;
            data.push(DataPoint::new(t, v, self.model.mass_at(t)));
        }

        SimulationResult::new(data, format!("Analytical ({} terms)", terms))
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

    #[test]
    fn test_order_and_constant() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);

        assert_abs_diff_eq!(solver.order(), 2.1838568563966754, epsilon = 1e-12);
        assert_abs_diff_eq!(solver.tau(9100.0), 1.0278431487642161, epsilon = 1e-12);
        assert_abs_diff_eq!(solver.tau(6300.0), 0.8552171944624022, epsilon = 1e-12);
        assert_abs_diff_eq!(
            solver.integration_constant(),
            0.9557315865843061,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_constant_is_resolved_once() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        let first = solver.integration_constant();
        solver.solve(5, 10).unwrap();
        assert_eq!(solver.integration_constant(), first);
    }

    #[test_case(10; "ten terms")]
    #[test_case(20; "twenty terms")]
    #[test_case(50; "fifty terms")]
    fn test_zero_initial_velocity(terms: usize) {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        assert_abs_diff_eq!(solver.velocity_at(0.0, terms).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mid_burn_velocity() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        let t = 2800.0 / 130.0 / 2.0;

        assert_abs_diff_eq!(solver.velocity_at(t, 50).unwrap(), 204.3290608633953, epsilon = 1e-8);
        // Too few terms visibly shifts the curve
        assert_abs_diff_eq!(solver.velocity_at(t, 3).unwrap(), 204.96134110544574, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_outside_burn() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        assert_eq!(solver.velocity_at(-1.0, 20).unwrap(), 0.0);
        assert_eq!(solver.velocity_at(30.0, 20).unwrap(), 0.0);
    }

    #[test]
    fn test_solve_samples() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        let result = solver.solve(50, 200).unwrap();
        let data = result.get_data();

        assert_eq!(data.len(), 201);
        assert_eq!(data[0].time, 0.0);
        assert_eq!(data[0].mass, 9100.0);
        assert_abs_diff_eq!(result.final_point().time, 2800.0 / 130.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.final_point().mass, 6300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.get_max_velocity(), 445.3911981665828, epsilon = 1e-6);
        assert_eq!(result.get_method_name(), "Analytical (50 terms)");
    }

    #[test]
    fn test_truncation_stability() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        let coarse = solver.solve(20, 200).unwrap();
        let fine = solver.solve(50, 200).unwrap();

        assert!((coarse.get_max_velocity() - fine.get_max_velocity()).abs() < 1e-3);
    }

    #[test_case(0, 200, "terms"; "zero terms")]
    #[test_case(20, 0, "plot_points"; "zero plot points")]
    fn test_zero_counts_rejected(terms: usize, plot_points: usize, field: &str) {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        match solver.solve(terms, plot_points) {
            Err(SimulationError::InvalidParameter { name, value: 0 }) => assert_eq!(name, field),
            other => panic!("expected InvalidParameter, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_oversized_sample_count_rejected() {
        let parameters = reference();
        let solver = AnalyticalSolver::new(&parameters);
        assert!(matches!(
            solver.solve(20, usize::MAX),
            Err(SimulationError::InvalidParameter { name: "plot_points", .. })
        ));
    }

    #[test]
    fn test_zero_drag_is_unstable() {
        let parameters = RocketParameters::new(9100.0, 6300.0, 130.0, 1550.0, 0.0, 0.5, 9.81).unwrap();
        let solver = AnalyticalSolver::new(&parameters);
        assert!(matches!(
            solver.solve(20, 10),
            Err(SimulationError::NumericallyUnstable { .. })
        ));
    }
}
