use nalgebra as na;

/// Integrator state: [velocity (m/s); mass (kg)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub data: na::Vector2<f64>,
}

impl FlightState {
    pub fn new(velocity: f64, mass: f64) -> Self {
        FlightState {
            data: na::Vector2::new(velocity, mass),
        }
    }

    pub fn velocity(&self) -> f64 {
        self.data[0]
    }

    pub fn mass(&self) -> f64 {
        self.data[1]
    }
}

impl std::ops::Add for FlightState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        FlightState {
            data: self.data + other.data,
        }
    }
}

impl std::ops::Mul<f64> for FlightState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        FlightState {
            data: self.data * scalar,
        }
    }
}
