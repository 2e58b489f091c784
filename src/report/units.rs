use crate::constants::{KMH_PER_MPH, KMH_PER_MPS, SPEED_RECORD_MPH};

pub fn mps_to_kmh(velocity: f64) -> f64 {
    velocity * KMH_PER_MPS
}

pub fn kmh_to_mph(velocity: f64) -> f64 {
    velocity / KMH_PER_MPH
}

pub fn mps_to_mph(velocity: f64) -> f64 {
    kmh_to_mph(mps_to_kmh(velocity))
}

pub fn breaks_speed_record(velocity_mps: f64) -> bool {
    mps_to_mph(velocity_mps) > SPEED_RECORD_MPH
}
