use super::analytical::AnalyticalSolver;
use super::numerical::NumericalSolver;
use crate::config::simulation::SimulationParams;
use crate::errors::{Result, SimulationError};
use crate::models::{RocketParameters, SimulationResult};
use std::thread::{self, JoinHandle};

/// Results of one configured run.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub numerical: SimulationResult,
    pub analytical: Option<SimulationResult>,
}

pub struct SimulationRunner {
    parameters: RocketParameters,
}

impl SimulationRunner {
    pub fn new(parameters: RocketParameters) -> Self {
        Self { parameters }
    }

    /// Runs the configured solves on the calling thread.
    pub fn run(&self, params: &SimulationParams) -> Result<SimulationOutcome> {
        params.validate()?;

        println!(
            "Starting numerical solve: {} with {} steps",
            params.method, params.steps
        );
        let numerical = NumericalSolver::new(&self.parameters).solve(params.method, params.steps)?;
        println!(
            "Finished numerical solve: peak {:.2} m/s at t={:.2}s",
            numerical.get_max_velocity(),
            numerical.get_time_of_max_velocity()
        );

        let analytical = if params.show_analytical {
            println!(
                "Starting analytical solve: {} terms, {} points",
                params.terms, params.plot_points
            );
            let result =
                AnalyticalSolver::new(&self.parameters).solve(params.terms, params.plot_points)?;
            println!(
                "Finished analytical solve: peak {:.2} m/s at t={:.2}s",
                result.get_max_velocity(),
                result.get_time_of_max_velocity()
            );
            Some(result)
        } else {
            None
        };

        Ok(SimulationOutcome {
            numerical,
            analytical,
        })
    }

    /// Runs the configured solves on a worker thread.
    ///
    /// Parameters are validated before the thread starts. The outcome only
    /// becomes available once every solve has finished.
    pub fn spawn(&self, params: SimulationParams) -> Result<SimulationHandle> {
        params.validate()?;

        let runner = SimulationRunner::new(self.parameters);
        let handle = thread::Builder::new()
            .name("simulation".to_string())
            .spawn(move || runner.run(&params))?;

        Ok(SimulationHandle { handle })
    }
}

pub struct SimulationHandle {
    handle: JoinHandle<Result<SimulationOutcome>>,
}

impl SimulationHandle {
    /// Blocks until the worker is done.
    pub fn join(self) -> Result<SimulationOutcome> {
        self.handle.join().map_err(|_| {
            eprintln!("Warning: simulation worker terminated abnormally");
            SimulationError::WorkerPanicked
        })?
    }
}
