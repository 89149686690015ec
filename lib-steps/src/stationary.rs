use alloc::vec::Vec;
use crate::*;

/// Smoothed motion energy of a recording: the acceleration magnitude with its constant part
/// removed by a zero-phase high-pass filter, rectified and then smoothed by a zero-phase low-pass
/// filter.
/// 
pub fn motion_energy(samples: &[ImuSample], config: &ProcessingConfig) -> Result<Vec<f64>, ProcessingError> {
    let high_pass = ZeroPhaseFilter::new(&config.high_pass)?;
    let low_pass = ZeroPhaseFilter::new(&config.low_pass)?;

    let magnitude: Vec<f64> = samples.iter().map(ImuSample::accel_magnitude).collect();
    let rectified: Vec<f64> = high_pass.apply(&magnitude).into_iter().map(libm::fabs).collect();

    Ok(low_pass.apply(&rectified))
}

/// Marks every sample whose energy is below the threshold as stationary.
/// 
pub fn classify(energy: &[f64], threshold: f64) -> Vec<bool> {
    energy.iter().map(|&e| e < threshold).collect()
}

/// Stationary mask of a recording, one entry per sample.
/// 
pub fn stationary_mask(samples: &[ImuSample], config: &ProcessingConfig) -> Result<Vec<bool>, ProcessingError> {
    let energy = motion_energy(samples, config)?;
    Ok(classify(&energy, config.stationary_threshold))
}
