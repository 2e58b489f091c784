use crate::constants::MAX_COUNT;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter `{name}`: {value} (must be between 1 and {max})", max = MAX_COUNT)]
    InvalidParameter { name: &'static str, value: usize },

    #[error("Invalid rocket parameters: {0}")]
    InvalidRocket(String),

    #[error("Trajectory must contain at least one point")]
    EmptyTrajectory,

    #[error("Numerically unstable at t={time:.4}s (value: {value})")]
    NumericallyUnstable { time: f64, value: f64 },

    #[error("Simulation worker panicked")]
    WorkerPanicked,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Rejects zero or oversized step, term and sample counts before they reach a
/// solver.
pub fn ensure_count(name: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_COUNT {
        return Err(SimulationError::InvalidParameter { name, value });
    }
    Ok(())
}
