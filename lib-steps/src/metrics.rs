use alloc::vec::Vec;
use cfg_if::cfg_if;
use math::*;
use crate::*;

/// Aggregate statistics of all steps in a recording.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics
{
    /// In meters; mean horizontal-and-vertical distance between the start and end of a step.
    pub average_length: f32,

    /// In meters; mean distance of the highest point of a step to its start-end line.
    pub average_height: f32,

    pub steps_count: usize,
}

/// Geometry of a single step.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMeasurement
{
    pub interval: StepInterval,
    pub length: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome
{
    Measured(StepMeasurement),

    /// The device ended where it started, there is no line to measure the height against. These
    /// steps are left out of the averages.
    Degenerate(StepInterval),
}

/// Measure one step on the position trace. `interval.end` is included since the first stationary
/// sample is where the foot lands.
/// 
pub fn measure_step(position: &[Vector], interval: StepInterval) -> StepOutcome {
    let Some(points) = position.get(interval.start..=interval.end) else {
        return StepOutcome::Degenerate(interval);
    };

    let start = position[interval.start];
    let end = position[interval.end];
    let line = end - start;
    let length = line.magnitude();
    if is_near_zero(length) {
        log::warn!("Degenerate step at samples {}..{}", interval.start, interval.end);
        return StepOutcome::Degenerate(interval);
    }

    let peak = points.iter()
        .copied()
        .max_by(|a, b| a.z.total_cmp(&b.z))
        .unwrap_or(start);
    let height = (start - peak).cross(&line).magnitude() / length;

    StepOutcome::Measured(StepMeasurement { interval, length, height })
}

/// Means over all measured steps, failing when there are none.
/// 
pub fn aggregate(outcomes: &[StepOutcome]) -> Result<StepMetrics, ProcessingError> {
    let measured: Vec<&StepMeasurement> = outcomes.iter().filter_map(|outcome| match outcome {
        StepOutcome::Measured(step) => Some(step),
        StepOutcome::Degenerate(_) => None,
    }).collect();

    if measured.is_empty() {
        return Err(ProcessingError::NoStepsDetected);
    }

    let mut total_length = 0.0;
    let mut total_height = 0.0;
    for step in &measured {
        cfg_if! { if #[cfg(feature = "debug")] {
            log::debug!(
                "step {}..{}: length {} m, height {} m",
                step.interval.start, step.interval.end, step.length, step.height
            );
        }}
        total_length += step.length;
        total_height += step.height;
    }

    let count = measured.len();
    Ok(StepMetrics {
        average_length: total_length / count as f32,
        average_height: total_height / count as f32,
        steps_count: count,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_measures_arc() {
        let position = [
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.2, 0.0, 0.1),
            Vector::new(0.4, 0.0, 0.05),
            Vector::new(0.6, 0.0, 0.0),
        ];
        let interval = StepInterval { start: 0, end: 3 };

        let StepOutcome::Measured(step) = measure_step(&position, interval) else {
            panic!("step should be measurable");
        };
        assert!(approx_eq(step.length, 0.6, 1e-6));
        assert!(approx_eq(step.height, 0.1, 1e-6));
    }

    #[test]
    fn test_height_is_perpendicular_to_slope() {
        // Walking up a slope, the peak lies on the start-end line.
        let position = [
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.5, 0.0, 0.5),
            Vector::new(1.0, 0.0, 1.0),
        ];
        let StepOutcome::Measured(step) = measure_step(&position, StepInterval { start: 0, end: 2 }) else {
            panic!("step should be measurable");
        };
        assert!(approx_eq(step.height, 0.0, 1e-6));
    }

    #[test]
    fn test_zero_displacement_is_degenerate() {
        let position = [Vector::zero(), Vector::new(0.0, 0.0, 0.2), Vector::zero()];
        let interval = StepInterval { start: 0, end: 2 };
        assert_eq!(measure_step(&position, interval), StepOutcome::Degenerate(interval));
    }

    #[test]
    fn test_out_of_range_interval_is_degenerate() {
        let position = [Vector::zero(); 3];
        let interval = StepInterval { start: 1, end: 3 };
        assert_eq!(measure_step(&position, interval), StepOutcome::Degenerate(interval));
    }

    #[test]
    fn test_aggregate_skips_degenerate_steps() {
        let interval = StepInterval { start: 0, end: 1 };
        let outcomes = [
            StepOutcome::Measured(StepMeasurement { interval, length: 0.5, height: 0.1 }),
            StepOutcome::Degenerate(interval),
            StepOutcome::Measured(StepMeasurement { interval, length: 0.7, height: 0.3 }),
        ];
        let metrics = aggregate(&outcomes).unwrap();
        assert_eq!(metrics.steps_count, 2);
        assert!(approx_eq(metrics.average_length, 0.6, 1e-6));
        assert!(approx_eq(metrics.average_height, 0.2, 1e-6));
    }

    #[test]
    fn test_only_degenerate_steps() {
        let interval = StepInterval { start: 0, end: 1 };
        let outcomes = [StepOutcome::Degenerate(interval)];
        assert_eq!(aggregate(&outcomes), Err(ProcessingError::NoStepsDetected));
    }
}
