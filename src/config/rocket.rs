use crate::models::rocket::RocketProperties;

/// Aussie Invader 5R rocket car, single burn.
pub struct AussieInvader5R;

impl AussieInvader5R {
    pub const INITIAL_MASS: f64 = 9100.0; // kg
    pub const FINAL_MASS: f64 = 6300.0; // kg
    pub const MASS_FLOW_RATE: f64 = 130.0; // kg/s
    pub const EXHAUST_VELOCITY: f64 = 1550.0; // m/s
    pub const DRAG_COEFFICIENT: f64 = 0.1; // kg/m
    pub const FRICTION_COEFFICIENT: f64 = 0.5;
    pub const GRAVITY: f64 = 9.81; // m/s²
}

impl RocketProperties for AussieInvader5R {
    fn initial_mass(&self) -> f64 {
        Self::INITIAL_MASS
    }

    fn final_mass(&self) -> f64 {
        Self::FINAL_MASS
    }

    fn mass_flow_rate(&self) -> f64 {
        Self::MASS_FLOW_RATE
    }

    fn exhaust_velocity(&self) -> f64 {
        Self::EXHAUST_VELOCITY
    }

    fn drag_coefficient(&self) -> f64 {
        Self::DRAG_COEFFICIENT
    }

    fn friction_coefficient(&self) -> f64 {
        Self::FRICTION_COEFFICIENT
    }

    fn gravity(&self) -> f64 {
        Self::GRAVITY
    }
}
