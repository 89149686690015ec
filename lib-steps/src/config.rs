use crate::*;

/// Every tunable constant of the step processing algorithm. The defaults are tuned for recordings
/// sampled at 100 Hz.
/// 
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingConfig
{
    /// In Hz; rate at which the samples were recorded.
    pub sample_rate: f32,

    /// Removes the constant (gravity) part of the acceleration magnitude.
    pub high_pass: FilterSpec,

    /// Smooths the rectified high-pass output into a motion energy envelope.
    pub low_pass: FilterSpec,

    /// Envelope values below this mark a sample as stationary.
    pub stationary_threshold: f64,

    /// In seconds; length of the settling period at the start of the recording.
    pub calibration_period: f32,

    /// How many filter updates are spent converging on the mean gravity reading.
    pub calibration_iterations: usize,

    /// Proportional feedback gain while calibrating.
    pub calibration_gain: f32,

    /// Proportional feedback gain for stationary samples.
    pub stationary_gain: f32,

    /// Proportional feedback gain for moving samples, zero means pure gyroscope integration.
    pub moving_gain: f32,

    /// Integral feedback gain.
    pub integral_gain: f32,

    /// In m/s^2.
    pub gravity: f32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        ProcessingConfig {
            sample_rate: 100.0,
            high_pass: FilterSpec::new(
                &[1.0, -0.999937170120766],
                &[0.999968585060383, -0.999968585060383],
            ),
            low_pass: FilterSpec::new(
                &[1.0, -0.726542528005361],
                &[0.136728735997320, 0.136728735997320],
            ),
            stationary_threshold: 0.05,
            calibration_period: 2.0,
            calibration_iterations: 2000,
            calibration_gain: 1.0,
            stationary_gain: 0.5,
            moving_gain: 0.0,
            integral_gain: 0.0,
            gravity: 9.81,
        }
    }
}

impl ProcessingConfig
{
    /// Same algorithm, with the energy filters redesigned for recordings sampled at 256 Hz.
    /// 
    pub fn sampled_at_256hz() -> Self {
        ProcessingConfig {
            sample_rate: 256.0,
            high_pass: FilterSpec::new(
                &[1.0, -0.999975456608585],
                &[0.999987728304293, -0.999987728304293],
            ),
            low_pass: FilterSpec::new(
                &[1.0, -0.884239215225350],
                &[0.0578803923873251, 0.0578803923873251],
            ),
            ..Default::default()
        }
    }

    /// In seconds; time between two samples.
    #[inline]
    pub fn sample_period(&self) -> f32 {
        1.0 / self.sample_rate
    }

    /// Number of samples within the calibration window, i.e. all samples whose timestamp does not
    /// exceed `calibration_period`.
    /// 
    pub fn calibration_samples(&self) -> usize {
        let dt = self.sample_period() as f64;
        let period = self.calibration_period as f64;
        // Same comparison as checking each timestamp, without accumulating rounding errors.
        let mut count = libm::floor(period / dt) as usize + 1;
        while count as f64 * dt <= period {
            count += 1;
        }
        while count > 1 && (count - 1) as f64 * dt > period {
            count -= 1;
        }
        count
    }

    pub fn validate(&self) -> Result<(), ProcessingError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ProcessingError::InvalidConfiguration("sample rate must be positive"));
        }
        if !(self.calibration_period.is_finite() && self.calibration_period >= 0.0) {
            return Err(ProcessingError::InvalidConfiguration("calibration period must not be negative"));
        }
        if self.calibration_iterations == 0 {
            return Err(ProcessingError::InvalidConfiguration("calibration needs at least one iteration"));
        }
        if !self.stationary_threshold.is_finite() || !self.gravity.is_finite() {
            return Err(ProcessingError::InvalidConfiguration("non-finite threshold or gravity"));
        }
        self.high_pass.validate()?;
        self.low_pass.validate()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_default_calibration_window() {
        // t = 0.00 ..= 2.00 s
        assert_eq!(ProcessingConfig::default().calibration_samples(), 201);
    }

    #[test]
    fn test_256hz_calibration_window() {
        // 512 / 256 = 2.0 exactly, so index 512 is still inside the window.
        assert_eq!(ProcessingConfig::sampled_at_256hz().calibration_samples(), 513);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        let config = ProcessingConfig { sample_rate: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ProcessingError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_bad_filter() {
        let config = ProcessingConfig {
            low_pass: FilterSpec::new(&[0.0, 1.0], &[1.0, 1.0]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ProcessingError::InvalidFilterSpecification(_))));
    }
}
