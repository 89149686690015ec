use std::{fs, path::Path};
use anyhow::{Context, Result};
use steps::{StepOutcome, Trace};

/// Dumps the intermediate buffers of a run as CSV files into `dir`, one file per stage, for
/// plotting.
/// 
pub fn write_trace(dir: &Path, trace: &Trace, dt: f32) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Can't create {}", dir.display()))?;
    let time = |i: usize| (i as f32 * dt).to_string();

    let mut writer = csv::Writer::from_path(dir.join("stationary.csv"))?;
    writer.write_record(["time", "energy", "stationary"])?;
    for (i, (energy, stationary)) in trace.energy.iter().zip(&trace.stationary).enumerate() {
        writer.write_record([time(i), energy.to_string(), (*stationary as u8).to_string()])?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(dir.join("orientation.csv"))?;
    writer.write_record(["time", "w", "x", "y", "z"])?;
    for (i, q) in trace.orientation.iter().enumerate() {
        writer.write_record([time(i), q.w.to_string(), q.x.to_string(), q.y.to_string(), q.z.to_string()])?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(dir.join("kinematics.csv"))?;
    writer.write_record([
        "time",
        "accel.x", "accel.y", "accel.z",
        "velocity.x", "velocity.y", "velocity.z",
        "drift.x", "drift.y", "drift.z",
        "position.x", "position.y", "position.z",
    ])?;
    for i in 0..trace.position.len() {
        let (a, v, d, p) = (trace.acceleration[i], trace.velocity[i], trace.drift[i], trace.position[i]);
        writer.write_record([
            time(i),
            a.x.to_string(), a.y.to_string(), a.z.to_string(),
            v.x.to_string(), v.y.to_string(), v.z.to_string(),
            d.x.to_string(), d.y.to_string(), d.z.to_string(),
            p.x.to_string(), p.y.to_string(), p.z.to_string(),
        ])?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(dir.join("steps.csv"))?;
    writer.write_record(["start", "end", "length", "height", "degenerate"])?;
    for outcome in &trace.outcomes {
        let record = match outcome {
            StepOutcome::Measured(step) => [
                step.interval.start.to_string(),
                step.interval.end.to_string(),
                step.length.to_string(),
                step.height.to_string(),
                "0".to_string(),
            ],
            StepOutcome::Degenerate(interval) => [
                interval.start.to_string(),
                interval.end.to_string(),
                String::new(),
                String::new(),
                "1".to_string(),
            ],
        };
        writer.write_record(record)?;
    }
    writer.flush()?;

    log::info!("Wrote trace to {}", dir.display());
    Ok(())
}
