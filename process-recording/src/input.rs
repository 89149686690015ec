use std::{fs::File, io::{BufReader, Read}, path::Path};
use anyhow::{Context, Result};
use serde::Deserialize;
use steps::ImuSample;

/// One sample as stored in a recording, accelerometer in g and gyroscope in deg/s.
/// 
#[derive(Debug, Deserialize)]
pub struct RawSample
{
    pub ax: f32,
    pub ay: f32,
    pub az: f32,
    pub gx: f32,
    pub gy: f32,
    pub gz: f32,
}

impl From<RawSample> for ImuSample {
    fn from(raw: RawSample) -> Self {
        ImuSample::from([raw.ax, raw.ay, raw.az, raw.gx, raw.gy, raw.gz])
    }
}

/// Reads a recording, JSON (an array of sample objects) if the extension says so, otherwise CSV
/// with a header row naming the six columns.
/// 
pub fn read_recording(path: &Path) -> Result<Vec<ImuSample>> {
    let file = File::open(path).with_context(|| format!("Can't open {}", path.display()))?;
    let reader = BufReader::new(file);

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let samples = if is_json { from_json(reader) } else { from_csv(reader) }
        .with_context(|| format!("Can't decode {}", path.display()))?;

    log::info!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

pub fn from_json<R: Read>(reader: R) -> Result<Vec<ImuSample>> {
    let raw: Vec<RawSample> = serde_json::from_reader(reader)?;
    Ok(raw.into_iter().map(ImuSample::from).collect())
}

pub fn from_csv<R: Read>(reader: R) -> Result<Vec<ImuSample>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader.deserialize::<RawSample>()
        .map(|record| Ok(ImuSample::from(record?)))
        .collect()
}
