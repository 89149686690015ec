//! Dead reckoning: world frame linear acceleration, velocity with zero velocity updates and drift
//! removal, and position.

use alloc::vec::Vec;
use math::*;
use crate::*;

/// Rotates every accelerometer reading into the world frame and removes gravity, giving the linear
/// acceleration in m/s^2.
/// 
pub fn world_acceleration(samples: &[ImuSample], orientations: &[Quaternion], gravity: f32) -> Vec<Vector> {
    samples.iter().zip(orientations).map(|(sample, orientation)| {
        let mut accel = orientation.rotate(&(sample.accel() * gravity));
        accel.z -= gravity;
        accel
    }).collect()
}

/// Integrates acceleration into velocity, forcing the velocity to zero on every stationary sample.
/// The first sample is taken to be at rest.
/// 
pub fn integrate_velocity(acceleration: &[Vector], stationary: &[bool], dt: f32) -> Vec<Vector> {
    let mut velocity = Vec::with_capacity(acceleration.len());
    let mut current = Vector::zero();

    for (i, (accel, &is_stationary)) in acceleration.iter().zip(stationary).enumerate() {
        if i > 0 {
            current += *accel * dt;
        }
        if is_stationary {
            current = Vector::zero();
        }
        velocity.push(current);
    }

    velocity
}

/// Integration drift of every step, assuming the velocity should be back at zero at the end of
/// each step and the error grew linearly from its start. Zero outside of the steps.
/// 
pub fn velocity_drift(velocity: &[Vector], steps: &[StepInterval]) -> Result<Vec<Vector>, ProcessingError> {
    if steps.is_empty() {
        return Err(ProcessingError::NoStepsDetected);
    }

    let mut drift = alloc::vec![Vector::zero(); velocity.len()];
    for step in steps {
        if step.is_empty() || step.end > velocity.len() {
            continue;
        }
        let rate = velocity[step.end - 1] / step.len() as f32;
        for (offset, k) in (step.start..step.end).enumerate() {
            drift[k] = rate * offset as f32;
        }
    }

    Ok(drift)
}

/// Velocity with the drift of every step subtracted.
/// 
pub fn remove_drift(velocity: &[Vector], drift: &[Vector]) -> Vec<Vector> {
    velocity.iter().zip(drift).map(|(v, d)| *v - *d).collect()
}

/// Integrates velocity into position, starting at the origin.
/// 
pub fn integrate_position(velocity: &[Vector], dt: f32) -> Vec<Vector> {
    let mut current = Vector::zero();
    velocity.iter().enumerate().map(|(i, v)| {
        if i > 0 {
            current += *v * dt;
        }
        current
    }).collect()
}
