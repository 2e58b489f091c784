use crate::errors::Result;
use crate::models::SimulationResult;
use csv::Writer;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Writes one CSV row per trajectory sample, with a header row.
pub fn write_trajectory<W: io::Write>(result: &SimulationResult, writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for point in result.get_data() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the trajectory to `path`, creating parent directories as needed.
pub fn write_trajectory_csv(result: &SimulationResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_trajectory(result, file)?;
    println!(
        "{} trajectory has been written to {}",
        result.get_method_name(),
        path.display()
    );
    Ok(())
}
