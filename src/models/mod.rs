pub mod parameters;
pub mod result;
pub mod rocket;
pub mod state;

pub use parameters::RocketParameters;
pub use result::{DataPoint, SimulationResult};
pub use rocket::RocketProperties;
pub use state::FlightState;
