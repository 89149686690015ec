//! Generated recordings with a known outcome.

use math::Vector;
use crate::*;

/// Sample period of every generated recording, matching the default configuration.
pub const DT: f32 = 1.0 / 100.0;

/// Device lying flat and still.
pub fn still(count: usize) -> Vec<ImuSample> {
    vec![ImuSample::new(Vector::new(0.0, 0.0, 1.0), Vector::zero()); count]
}

/// Level device pushed forward along x with `accel` g for `samples_per_phase` samples, then braked
/// with the same acceleration for as long. It starts and ends at rest, having travelled
/// `accel * g * (samples_per_phase * DT)^2` meters.
pub fn forward_step(samples_per_phase: usize, accel: f32) -> Vec<ImuSample> {
    let push = ImuSample::new(Vector::new(accel, 0.0, 1.0), Vector::zero());
    let brake = ImuSample::new(Vector::new(-accel, 0.0, 1.0), Vector::zero());
    let mut samples = vec![push; samples_per_phase];
    samples.extend(vec![brake; samples_per_phase]);
    samples
}

/// Vertical jitter for `count` samples. The fourth sample is stronger than the others, which keeps
/// the energy filters settled on gravity when this is at either end of a recording.
pub fn jitter(count: usize) -> Vec<ImuSample> {
    let mut samples = vec![ImuSample::new(Vector::new(0.0, 0.0, 1.2), Vector::zero()); count];
    samples[3].az = 1.4;
    samples
}

/// Same as `jitter`, with the stronger sample fourth from the end.
pub fn trailing_jitter(count: usize) -> Vec<ImuSample> {
    let mut samples = jitter(count);
    samples.reverse();
    samples
}

/// Stationary bookends around a single forward step.
pub fn single_step() -> Vec<ImuSample> {
    let mut samples = still(300);
    samples.extend(forward_step(25, 1.0));
    samples.extend(still(200));
    samples
}

/// Meters travelled by `forward_step(samples_per_phase, accel)` with the default gravity.
pub fn forward_step_length(samples_per_phase: usize, accel: f32) -> f32 {
    let phase = samples_per_phase as f32 * DT;
    accel * 9.81 * phase * phase
}

/// Small deterministic pseudo random generator, good enough for noisy test input.
pub struct Lcg(pub u64);

impl Lcg {
    /// Uniform in `[-1, 1)`.
    pub fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    }

    pub fn vector(&mut self, scale: f32) -> Vector {
        Vector::new(self.next(), self.next(), self.next()) * scale
    }
}
