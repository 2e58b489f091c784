use super::rocket::RocketProperties;
use crate::errors::{Result, SimulationError};
use serde::{Deserialize, Serialize};

/// Validated snapshot of a vehicle's physical constants.
///
/// Both solvers borrow the same `RocketParameters`; it is never mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketParameters {
    initial_mass: f64,
    final_mass: f64,
    mass_flow_rate: f64,
    exhaust_velocity: f64,
    drag_coefficient: f64,
    friction_coefficient: f64,
    gravity: f64,
}

impl RocketParameters {
    pub fn new(
        initial_mass: f64,
        final_mass: f64,
        mass_flow_rate: f64,
        exhaust_velocity: f64,
        drag_coefficient: f64,
        friction_coefficient: f64,
        gravity: f64,
    ) -> Result<Self> {
        let parameters = RocketParameters {
            initial_mass,
            final_mass,
            mass_flow_rate,
            exhaust_velocity,
            drag_coefficient,
            friction_coefficient,
            gravity,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn from_properties<T: RocketProperties>(rocket: &T) -> Result<Self> {
        Self::new(
            rocket.initial_mass(),
            rocket.final_mass(),
            rocket.mass_flow_rate(),
            rocket.exhaust_velocity(),
            rocket.drag_coefficient(),
            rocket.friction_coefficient(),
            rocket.gravity(),
        )
    }

    fn validate(&self) -> Result<()> {
        let values = [
            ("initial mass", self.initial_mass),
            ("final mass", self.final_mass),
            ("mass flow rate", self.mass_flow_rate),
            ("exhaust velocity", self.exhaust_velocity),
            ("drag coefficient", self.drag_coefficient),
            ("friction coefficient", self.friction_coefficient),
            ("gravity", self.gravity),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(SimulationError::InvalidRocket(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(SimulationError::InvalidRocket(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.final_mass <= 0.0 {
            return Err(SimulationError::InvalidRocket(format!(
                "final mass must be positive, got {}",
                self.final_mass
            )));
        }
        if self.initial_mass <= self.final_mass {
            return Err(SimulationError::InvalidRocket(format!(
                "initial mass ({}) must exceed final mass ({})",
                self.initial_mass, self.final_mass
            )));
        }
        if self.mass_flow_rate <= 0.0 {
            return Err(SimulationError::InvalidRocket(format!(
                "mass flow rate must be positive, got {}",
                self.mass_flow_rate
            )));
        }

        Ok(())
    }
}

impl RocketProperties for RocketParameters {
    fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    fn final_mass(&self) -> f64 {
        self.final_mass
    }

    fn mass_flow_rate(&self) -> f64 {
        self.mass_flow_rate
    }

    fn exhaust_velocity(&self) -> f64 {
        self.exhaust_velocity
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }

    fn gravity(&self) -> f64 {
        self.gravity
    }
}
