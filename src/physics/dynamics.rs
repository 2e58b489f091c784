use crate::models::{FlightState, RocketParameters, RocketProperties};

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Straight-line burn under constant thrust, quadratic drag and friction.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsModel<'a> {
    parameters: &'a RocketParameters,
}

impl<'a> PhysicsModel<'a> {
    pub fn new(parameters: &'a RocketParameters) -> Self {
        Self { parameters }
    }

    pub fn get_parameters(&self) -> &'a RocketParameters {
        self.parameters
    }

    /// dv/dt = Q*U/m - BETA*v²/m - MU*G, for m > 0.
    pub fn derivative(&self, velocity: f64, mass: f64) -> f64 {
        let p = self.parameters;
        let thrust = p.mass_flow_rate() * p.exhaust_velocity() / mass;
        let air_resistance = p.drag_coefficient() * velocity * velocity / mass;
        let friction = p.friction_coefficient() * p.gravity();

        thrust - air_resistance - friction
    }

    pub fn burn_time(&self) -> f64 {
        let p = self.parameters;
        (p.initial_mass() - p.final_mass()) / p.mass_flow_rate()
    }

    pub fn mass_at(&self, time: f64) -> f64 {
        self.parameters.initial_mass() - self.parameters.mass_flow_rate() * time
    }

    pub fn initial_state(&self) -> FlightState {
        FlightState::new(0.0, self.parameters.initial_mass())
    }
}

impl EquationsOfMotion for PhysicsModel<'_> {
    type State = FlightState;

    fn compute_derivative(&self, state: &FlightState) -> FlightState {
        // Mass decreases linearly regardless of velocity
        FlightState::new(
            self.derivative(state.velocity(), state.mass()),
            -self.parameters.mass_flow_rate(),
        )
    }
}
