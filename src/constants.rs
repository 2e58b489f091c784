// Unit conversions
pub const KMH_PER_MPS: f64 = 3.6; // m/s -> km/h
pub const KMH_PER_MPH: f64 = 1.609; // km/h per mile/h

// Land speed record the vehicle is built to beat
pub const SPEED_RECORD_MPH: f64 = 1000.0;

// Series evaluation
pub const CONSTANT_RESOLUTION_TERMS: usize = 50; // Terms used to resolve C from v(0) = 0
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

// Run defaults
pub const DEFAULT_STEPS: usize = 50;
pub const DEFAULT_TERMS: usize = 20;
pub const DEFAULT_PLOT_POINTS: usize = 200;
pub const MAX_COUNT: usize = 10_000_000; // Upper bound on steps, terms and samples
