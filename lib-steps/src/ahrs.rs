//! Mahony style complementary filter. The gyroscope is integrated into a quaternion, and the
//! cross product between the measured and the predicted direction of gravity is fed back as a
//! correction of the angular rate.

use alloc::vec::Vec;
use math::*;
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    /// Converging on the gravity direction of the settling period, no samples streamed yet.
    Calibrating,

    /// Following the recording sample by sample.
    Streaming,
}

/// State of one orientation estimate. Owned by a single processing run and never shared.
/// 
#[derive(Debug, Clone)]
pub struct OrientationFilter
{
    /// Current estimate, rotates device frame vectors into the world frame.
    pub orientation: Quaternion,

    /// Accumulated integral feedback, in rad/s.
    pub integral_feedback: Vector,

    /// Weight of the accelerometer correction for the next update.
    pub proportional_gain: f32,

    pub integral_gain: f32,

    /// In seconds.
    sample_period: f32,

    phase: Phase,
}

impl OrientationFilter
{
    pub fn new(sample_period: f32, integral_gain: f32) -> Self {
        OrientationFilter {
            orientation: Quaternion::identity(),
            integral_feedback: Vector::zero(),
            proportional_gain: 0.0,
            integral_gain,
            sample_period,
            phase: Phase::Calibrating,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Settle on the mean accelerometer reading of the calibration window by repeatedly updating
    /// with it and no rotation, then switch to streaming.
    /// 
    pub fn calibrate(&mut self, window: &[ImuSample], iterations: usize, gain: f32) -> Result<(), ProcessingError> {
        if self.phase != Phase::Calibrating {
            return Err(ProcessingError::InvalidConfiguration("orientation filter is already streaming"));
        }

        let readings: Vec<Vector> = window.iter().map(ImuSample::accel).collect();
        let mean_accel = Vector::mean(readings.iter())
            .ok_or(ProcessingError::InsufficientSamples { required: 1, actual: 0 })?;

        self.proportional_gain = gain;
        for _ in 0..iterations {
            self.update(&Vector::zero(), &mean_accel)?;
        }

        log::debug!(
            "Calibrated on {} samples, mean accel {:?}, orientation {:?}",
            window.len(), mean_accel, self.orientation
        );
        self.phase = Phase::Streaming;
        Ok(())
    }

    /// Advance the estimate by one sample period. `gyro` is in rad/s, `accel` in any unit since
    /// only its direction is used.
    /// 
    pub fn update(&mut self, gyro: &Vector, accel: &Vector) -> Result<Quaternion, ProcessingError> {
        let measured = accel.try_normalize()
            .ok_or(ProcessingError::NumericalInstability("accelerometer reading has no direction"))?;

        // Half of the predicted gravity direction, so the error is half the usual cross product.
        let predicted = self.orientation.vertical_in_body() * 0.5;
        let error = measured.cross(&predicted);

        let mut rate = *gyro;
        if self.integral_gain > 0.0 {
            self.integral_feedback += error * (self.integral_gain * self.sample_period);
            rate += self.integral_feedback;
        } else {
            self.integral_feedback = Vector::zero();
        }
        rate += error * self.proportional_gain;

        self.orientation = self.orientation
            .integrate(&rate, self.sample_period)
            .try_normalize()
            .ok_or(ProcessingError::NumericalInstability("orientation quaternion collapsed"))?;

        Ok(self.orientation)
    }

    /// Run over the whole recording. The accelerometer is only trusted while the sample is
    /// stationary, during motion the gain switches to `moving_gain`.
    /// 
    pub fn stream(
        &mut self,
        samples: &[ImuSample],
        stationary: &[bool],
        config: &ProcessingConfig,
    ) -> Result<Vec<Quaternion>, ProcessingError> {
        samples.iter().zip(stationary).map(|(sample, &is_stationary)| {
            self.proportional_gain = if is_stationary { config.stationary_gain } else { config.moving_gain };
            self.update(&sample.gyro_radians(), &sample.accel())
        }).collect()
    }
}

/// Orientation of the device for every sample of the recording.
/// 
pub fn estimate_orientations(
    samples: &[ImuSample],
    stationary: &[bool],
    config: &ProcessingConfig,
) -> Result<Vec<Quaternion>, ProcessingError> {
    let window = config.calibration_samples();
    if samples.len() <= window {
        return Err(ProcessingError::InsufficientSamples { required: window + 1, actual: samples.len() });
    }

    let mut filter = OrientationFilter::new(config.sample_period(), config.integral_gain);
    filter.calibrate(&samples[..window], config.calibration_iterations, config.calibration_gain)?;
    filter.stream(samples, stationary, config)
}
