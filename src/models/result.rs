use crate::errors::{Result, SimulationError};
use serde::{Deserialize, Serialize};

/// One trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "time_s")]
    pub time: f64,
    #[serde(rename = "velocity_mps")]
    pub velocity: f64,
    #[serde(rename = "mass_kg")]
    pub mass: f64,
}

impl DataPoint {
    pub fn new(time: f64, velocity: f64, mass: f64) -> Self {
        DataPoint {
            time,
            velocity,
            mass,
        }
    }
}

/// Completed trajectory produced by one solver run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    data: Vec<DataPoint>,
    max_velocity: f64,
    time_of_max_velocity: f64,
    method_name: String,
}

impl SimulationResult {
    pub fn new(data: Vec<DataPoint>, method_name: impl Into<String>) -> Result<Self> {
        let first = *data.first().ok_or(SimulationError::EmptyTrajectory)?;

        // First point attaining the maximum wins
        let mut max = first;
        for point in &data[1..] {
            if point.velocity > max.velocity {
                max = *point;
            }
        }

        Ok(SimulationResult {
            max_velocity: max.velocity,
            time_of_max_velocity: max.time,
            data,
            method_name: method_name.into(),
        })
    }

    pub fn get_data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn get_max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn get_time_of_max_velocity(&self) -> f64 {
        self.time_of_max_velocity
    }

    pub fn get_method_name(&self) -> &str {
        &self.method_name
    }

    pub fn final_point(&self) -> DataPoint {
        // Non-empty by construction
        self.data[self.data.len() - 1]
    }
}
