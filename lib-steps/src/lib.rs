//! Pedestrian step statistics from a recorded session of IMU samples.
//!
//! The whole recording is processed at once: a motion energy envelope decides which samples are
//! stationary, a complementary filter tracks the orientation, the acceleration is rotated into the
//! world frame and integrated twice with zero velocity updates and drift removal, and every
//! movement between two stationary periods is measured as one step.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub use error::*;

pub mod sample;
pub use sample::*;

pub mod config;
pub use config::*;

pub mod filter;
pub use filter::*;

pub mod stationary;
pub use stationary::*;

pub mod ahrs;
pub use ahrs::*;

pub mod kinematics;
pub use kinematics::*;

pub mod segmentation;
pub use segmentation::*;

pub mod metrics;
pub use metrics::*;

pub mod pipeline;
pub use pipeline::*;

#[cfg(test)]
mod tests;
