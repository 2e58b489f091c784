pub mod analytical;
pub mod numerical;
pub mod runner;

pub use analytical::AnalyticalSolver;
pub use numerical::{IntegrationMethod, NumericalSolver};
pub use runner::{SimulationHandle, SimulationOutcome, SimulationRunner};
