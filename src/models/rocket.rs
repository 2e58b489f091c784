/// Physical constants of a single-burn vehicle.
pub trait RocketProperties {
    fn initial_mass(&self) -> f64;
    fn final_mass(&self) -> f64;
    fn mass_flow_rate(&self) -> f64;
    fn exhaust_velocity(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn friction_coefficient(&self) -> f64;
    fn gravity(&self) -> f64;
}
