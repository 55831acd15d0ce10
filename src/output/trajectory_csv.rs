use crate::models::state::TrajectorySample;
use csv::Writer;
use log::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes `time,altitude,velocity,fuelUsed,distance` rows, header first.
pub fn write_trajectory<W: Write>(
    writer: W,
    samples: &[TrajectorySample],
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectory_file<P: AsRef<Path>>(
    path: P,
    samples: &[TrajectorySample],
) -> Result<(), csv::Error> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(path)?;
    write_trajectory(file, samples)?;
    info!(
        "Trajectory written to {} ({} samples)",
        path.display(),
        samples.len()
    );
    Ok(())
}
