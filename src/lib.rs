pub mod config;
pub mod constants;
pub mod errors;
pub mod integrators;
pub mod models;
pub mod physics;
pub mod report;
pub mod solvers;

pub use config::rocket::AussieInvader5R;
pub use config::simulation::SimulationParams;
pub use errors::{Result, SimulationError};
pub use models::{DataPoint, RocketParameters, RocketProperties, SimulationResult};
pub use physics::dynamics::PhysicsModel;
pub use solvers::{
    AnalyticalSolver, IntegrationMethod, NumericalSolver, SimulationOutcome, SimulationRunner,
};
