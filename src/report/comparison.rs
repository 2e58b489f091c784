use super::units::{breaks_speed_record, mps_to_kmh, mps_to_mph};
use crate::config::simulation::SimulationParams;
use crate::constants::SPEED_RECORD_MPH;
use crate::models::SimulationResult;
use crate::solvers::SimulationOutcome;
use chrono::{DateTime, Utc};
use std::fmt;

/// Peak-velocity comparison of a numerical run against the analytical curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub numerical_peak: f64,
    pub analytical_peak: f64,
    pub absolute_error: f64,
    pub relative_error_percent: f64,
    pub breaks_record: bool,
}

impl Comparison {
    pub fn new(numerical: &SimulationResult, analytical: &SimulationResult) -> Self {
        let numerical_peak = numerical.get_max_velocity();
        let analytical_peak = analytical.get_max_velocity();
        let absolute_error = (numerical_peak - analytical_peak).abs();

        Self {
            numerical_peak,
            analytical_peak,
            absolute_error,
            relative_error_percent: absolute_error / analytical_peak * 100.0,
            breaks_record: breaks_speed_record(analytical_peak),
        }
    }
}

/// Textual run summary.
pub struct Report<'a> {
    params: &'a SimulationParams,
    outcome: &'a SimulationOutcome,
    generated: DateTime<Utc>,
}

impl<'a> Report<'a> {
    pub fn new(params: &'a SimulationParams, outcome: &'a SimulationOutcome) -> Self {
        Self {
            params,
            outcome,
            generated: Utc::now(),
        }
    }
}

pub fn render_report(params: &SimulationParams, outcome: &SimulationOutcome) -> String {
    Report::new(params, outcome).to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let (params, outcome) = (self.params, self.outcome);
        let numerical = &outcome.numerical;

        writeln!(out, "=== SIMULATION RESULTS ===")?;
        writeln!(out, "Generated: {}", self.generated.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(out)?;
        writeln!(out, "Parameters:")?;
        writeln!(out, "  - Method: {}", numerical.get_method_name())?;
        writeln!(out, "  - Steps: {}", params.steps)?;
        if outcome.analytical.is_some() {
            writeln!(out, "  - Series terms: {}", params.terms)?;
        }
        writeln!(out)?;

        let peak = numerical.get_max_velocity();
        writeln!(out, "NUMERICAL SOLUTION:")?;
        writeln!(out, "  - Max velocity: {:.2} m/s", peak)?;
        writeln!(out, "                = {:.2} km/h", mps_to_kmh(peak))?;
        writeln!(out, "                = {:.2} mph", mps_to_mph(peak))?;
        writeln!(
            out,
            "  - Time of max:  {:.2} s",
            numerical.get_time_of_max_velocity()
        )?;

        if let Some(analytical) = &outcome.analytical {
            let comparison = Comparison::new(numerical, analytical);

            writeln!(out)?;
            writeln!(out, "ANALYTICAL SOLUTION:")?;
            writeln!(out, "  - Max velocity: {:.2} m/s", comparison.analytical_peak)?;
            writeln!(
                out,
                "  - Error:        {:.4} m/s ({:.2}%)",
                comparison.absolute_error, comparison.relative_error_percent
            )?;
            writeln!(out)?;
            if comparison.breaks_record {
                writeln!(
                    out,
                    "RECORD: theoretically beats the {:.0} mph record!",
                    SPEED_RECORD_MPH
                )?;
            } else {
                writeln!(
                    out,
                    "NO RECORD: not fast enough for the {:.0} mph record.",
                    SPEED_RECORD_MPH
                )?;
            }
        }

        Ok(())
    }
}
