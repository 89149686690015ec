use alloc::vec::Vec;
use math::*;
use crate::*;

/// Every intermediate buffer of one run, each with one entry per input sample (except the per step
/// lists).
/// 
#[derive(Debug, Clone, Default)]
pub struct Trace
{
    pub energy: Vec<f64>,
    pub stationary: Vec<bool>,
    pub orientation: Vec<Quaternion>,

    /// In m/s^2; world frame acceleration without gravity.
    pub acceleration: Vec<Vector>,

    /// In m/s; velocity before drift removal.
    pub raw_velocity: Vec<Vector>,
    pub drift: Vec<Vector>,

    /// In m/s; velocity after drift removal.
    pub velocity: Vec<Vector>,

    /// In meters.
    pub position: Vec<Vector>,

    pub steps: Vec<StepInterval>,
    pub outcomes: Vec<StepOutcome>,
}

/// Turns a complete recording into step statistics. Holds nothing but configuration, every run
/// starts from scratch so runs are independent of each other.
/// 
#[derive(Debug, Clone)]
pub struct StepsProcessor
{
    config: ProcessingConfig,
}

impl StepsProcessor
{
    pub fn new(config: ProcessingConfig) -> Result<Self, ProcessingError> {
        config.validate()?;
        Ok(StepsProcessor { config })
    }

    #[inline]
    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    pub fn process(&self, samples: &[ImuSample]) -> Result<StepMetrics, ProcessingError> {
        self.process_with_trace(samples).map(|(metrics, _)| metrics)
    }

    /// Same as `process`, but also hands back every intermediate buffer.
    /// 
    pub fn process_with_trace(&self, samples: &[ImuSample]) -> Result<(StepMetrics, Trace), ProcessingError> {
        let config = &self.config;
        let dt = config.sample_period();

        let required = config.calibration_samples() + 1;
        if samples.len() < required {
            return Err(ProcessingError::InsufficientSamples { required, actual: samples.len() });
        }

        let energy = motion_energy(samples, config)?;
        let stationary = classify(&energy, config.stationary_threshold);
        log::debug!(
            "{} of {} samples stationary",
            stationary.iter().filter(|&&s| s).count(), stationary.len()
        );

        let orientation = estimate_orientations(samples, &stationary, config)?;
        let acceleration = world_acceleration(samples, &orientation, config.gravity);

        let raw_velocity = integrate_velocity(&acceleration, &stationary, dt);
        let steps = step_intervals(&stationary);
        let drift = velocity_drift(&raw_velocity, &steps)?;
        let velocity = remove_drift(&raw_velocity, &drift);
        let position = integrate_position(&velocity, dt);

        let outcomes: Vec<StepOutcome> = steps.iter().map(|&step| measure_step(&position, step)).collect();
        let metrics = aggregate(&outcomes)?;

        log::info!(
            "{} steps, average length {} m, average height {} m",
            metrics.steps_count, metrics.average_length, metrics.average_height
        );

        let trace = Trace {
            energy,
            stationary,
            orientation,
            acceleration,
            raw_velocity,
            drift,
            velocity,
            position,
            steps,
            outcomes,
        };
        Ok((metrics, trace))
    }
}

/// Process a recording sampled at 100 Hz with the default configuration.
/// 
pub fn process(samples: &[ImuSample]) -> Result<StepMetrics, ProcessingError> {
    StepsProcessor::new(ProcessingConfig::default())?.process(samples)
}
