#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;


pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;
