use crate::constants::{DEFAULT_PLOT_POINTS, DEFAULT_STEPS, DEFAULT_TERMS};
use crate::errors::{ensure_count, Result};
use crate::solvers::numerical::IntegrationMethod;
use serde::{Deserialize, Serialize};

/// Run parameters collected from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub steps: usize,
    pub terms: usize,
    pub method: IntegrationMethod,
    pub show_analytical: bool,
    pub plot_points: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            terms: DEFAULT_TERMS,
            method: IntegrationMethod::RungeKutta4,
            show_analytical: true,
            plot_points: DEFAULT_PLOT_POINTS,
        }
    }
}

impl SimulationParams {
    pub fn new(steps: usize, terms: usize, method: IntegrationMethod, show_analytical: bool) -> Self {
        Self {
            steps,
            terms,
            method,
            show_analytical,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_count("steps", self.steps)?;
        if self.show_analytical {
            ensure_count("terms", self.terms)?;
            ensure_count("plot_points", self.plot_points)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.steps, 50);
        assert_eq!(params.terms, 20);
        assert_eq!(params.method, IntegrationMethod::RungeKutta4);
        assert!(params.show_analytical);
        assert_eq!(params.plot_points, 200);
        assert!(params.validate().is_ok());
    }

    #[test_case(0, 20, true => "steps"; "zero steps")]
    #[test_case(50, 0, true => "terms"; "zero terms")]
    #[test_case(usize::MAX, 20, false => "steps"; "oversized steps")]
    fn test_zero_counts_rejected(steps: usize, terms: usize, show_analytical: bool) -> &'static str {
        let params = SimulationParams::new(steps, terms, IntegrationMethod::Euler, show_analytical);
        match params.validate() {
            Err(SimulationError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_terms_ignored_without_analytical() {
        let params = SimulationParams::new(10, 0, IntegrationMethod::Euler, false);
        assert!(params.validate().is_ok());
    }
}
