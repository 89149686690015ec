use math::*;
use crate::*;
use super::synthetic::*;

fn processor() -> StepsProcessor {
    StepsProcessor::new(ProcessingConfig::default()).unwrap()
}

#[test]
fn test_single_step_length() {
    let (metrics, trace) = processor().process_with_trace(&single_step()).unwrap();

    let expected = forward_step_length(25, 1.0);
    println!("{:?}, expected length {}", metrics, expected);
    assert_eq!(metrics.steps_count, 1);
    assert!(approx_eq(metrics.average_length, expected, 1e-3));
    assert!(approx_eq(metrics.average_height, 0.0, 1e-4));

    // The step covers the pulse, which starts at sample 300 and lasts 50 samples.
    let step = trace.steps[0];
    assert!(step.start <= 300 && step.end >= 350, "{:?}", step);
}

#[test]
fn test_buffers_match_sample_count() {
    let samples = single_step();
    let (_, trace) = processor().process_with_trace(&samples).unwrap();

    let n = samples.len();
    assert_eq!(trace.energy.len(), n);
    assert_eq!(trace.stationary.len(), n);
    assert_eq!(trace.orientation.len(), n);
    assert_eq!(trace.acceleration.len(), n);
    assert_eq!(trace.raw_velocity.len(), n);
    assert_eq!(trace.drift.len(), n);
    assert_eq!(trace.velocity.len(), n);
    assert_eq!(trace.position.len(), n);
    assert_eq!(trace.outcomes.len(), trace.steps.len());
}

#[test]
fn test_velocity_is_zero_while_stationary() {
    let (_, trace) = processor().process_with_trace(&single_step()).unwrap();
    for (v, &stationary) in trace.velocity.iter().zip(&trace.stationary) {
        if stationary {
            assert_eq!(*v, Vector::zero());
        }
    }
}

#[test]
fn test_still_recording_has_no_steps() {
    let samples = still(300);
    let config = ProcessingConfig::default();

    let mask = stationary_mask(&samples, &config).unwrap();
    assert!(mask[config.calibration_samples()..].iter().all(|&s| s));

    assert_eq!(processor().process(&samples), Err(ProcessingError::NoStepsDetected));
}

#[test]
fn test_recording_shorter_than_calibration() {
    let result = processor().process(&still(150));
    assert_eq!(result, Err(ProcessingError::InsufficientSamples { required: 202, actual: 150 }));
}

#[test]
fn test_zero_accel_sample_aborts_run() {
    let mut samples = single_step();
    samples[450] = ImuSample::default();
    let result = processor().process(&samples);
    assert!(matches!(result, Err(ProcessingError::NumericalInstability(_))), "{:?}", result);
}

#[test]
fn test_incomplete_movement_at_both_ends_is_ignored() {
    let mut samples = jitter(20);
    samples.extend(still(280));
    samples.extend(forward_step(25, 1.0));
    samples.extend(still(200));
    samples.extend(trailing_jitter(30));

    let (metrics, trace) = processor().process_with_trace(&samples).unwrap();
    assert!(!trace.stationary[0]);
    assert!(!trace.stationary[samples.len() - 1]);

    assert_eq!(metrics.steps_count, 1);
    assert!(approx_eq(metrics.average_length, forward_step_length(25, 1.0), 1e-3));
}

#[test]
fn test_trimmed_boundaries_with_handmade_mask() {
    // Moving at both ends with one complete step in between.
    let mut stationary = vec![true; 40];
    stationary[..5].fill(false);
    stationary[10..20].fill(false);
    stationary[35..].fill(false);

    let acceleration = vec![Vector::new(1.0, 0.0, 0.0); 40];
    let velocity = integrate_velocity(&acceleration, &stationary, DT);
    let steps = step_intervals(&stationary);
    assert_eq!(steps, vec![StepInterval { start: 10, end: 20 }]);

    let drift = velocity_drift(&velocity, &steps).unwrap();
    let corrected = remove_drift(&velocity, &drift);
    assert_eq!(corrected.len(), 40);

    // Untouched outside the step.
    assert_eq!(corrected[3], velocity[3]);
    assert_eq!(corrected[37], velocity[37]);
    // Residual of the last moving sample shrinks to a single sample's worth of drift.
    assert!(corrected[19].x < velocity[19].x);
    assert!(approx_eq(corrected[19].x, velocity[19].x / 10.0, 1e-6));
}

#[test]
fn test_orientation_stays_normalized() {
    let config = ProcessingConfig::default();
    let mut rng = Lcg(0x5eed);

    let mut samples = still(250);
    for _ in 0..400 {
        let accel = Vector::new(0.0, 0.0, 1.0) + rng.vector(0.4);
        let gyro = rng.vector(180.0);
        samples.push(ImuSample::new(accel, gyro));
    }
    samples.extend(still(100));

    let mask = stationary_mask(&samples, &config).unwrap();
    let orientations = estimate_orientations(&samples, &mask, &config).unwrap();
    assert_eq!(orientations.len(), samples.len());
    for q in orientations {
        assert!(approx_eq(q.magnitude(), 1.0, 1e-4), "{:?}", q);
    }
}

#[test]
fn test_runs_are_reproducible() {
    let samples = single_step();
    let first = processor().process(&samples).unwrap();
    let second = processor().process(&samples).unwrap();
    assert_eq!(first, second);

    let shared = processor();
    assert_eq!(shared.process(&samples).unwrap(), shared.process(&samples).unwrap());
}

#[test]
fn test_default_entry_point() {
    assert_eq!(process(&single_step()), processor().process(&single_step()));
}

#[test]
fn test_rejects_invalid_configuration() {
    let config = ProcessingConfig { calibration_iterations: 0, ..Default::default() };
    assert!(matches!(StepsProcessor::new(config), Err(ProcessingError::InvalidConfiguration(_))));
}
