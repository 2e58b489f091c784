pub mod comparison;
pub mod export;
pub mod units;

pub use comparison::{render_report, Comparison, Report};
pub use export::{write_trajectory, write_trajectory_csv};
