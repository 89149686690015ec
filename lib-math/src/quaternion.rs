use core::ops::{Add, Mul};
use crate::*;

/// Orientation as a quaternion `w + xi + yj + zk`. Rotating with it maps vectors from the device
/// (body) frame into the world frame.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32, 
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Quaternion 
{
    /// Create a new quaternion with the given values.
    /// 
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    /// 
    pub const fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }
    
    /// Constructs a quaternion from a scalar (w) and a vector (x, y, z)
    /// 
    pub const fn from_parts(w: f32, vector: Vector) -> Self {
        Quaternion::new(w, vector.x, vector.y, vector.z)
    }

    /// The imaginary (x, y, z) part.
    /// 
    #[inline]
    pub fn vector_part(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Get the magnitude of the quaternion.
    /// 
    #[inline]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Scale to a unit quaternion, `None` if the magnitude collapsed to (nearly) zero.
    /// 
    pub fn try_normalize(&self) -> Option<Quaternion> {
        let magnitude = self.magnitude();
        if is_near_zero(magnitude) {
            return None;
        }
        Some(Quaternion {
            w: self.w / magnitude,
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        })
    }

    /// Compute the conjugate of the quaternion, for unit quaternions this is also the inverse.
    /// 
    pub fn conjugate(&self) -> Self {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a vector with `q * v * q^-1`, assumes `self` is a unit quaternion.
    /// 
    pub fn rotate(&self, vector: &Vector) -> Vector {
        let rotated = self * Quaternion::from_parts(0.0, *vector) * self.conjugate();
        rotated.vector_part()
    }

    /// Direction of the world's vertical (z) axis as seen from the body frame. For a device at rest
    /// this is where the accelerometer should be pointing.
    /// 
    pub fn vertical_in_body(&self) -> Vector {
        Vector {
            x: 2.0 * (self.x * self.z - self.w * self.y),
            y: 2.0 * (self.w * self.x + self.y * self.z),
            z: self.w * self.w - self.x * self.x - self.y * self.y + self.z * self.z,
        }
    }

    /// First order integration of `dq/dt = 0.5 * q * (0, rate)` over `dt` seconds, with `rate` the
    /// angular velocity in rad/s in the body frame. The result is NOT normalized.
    /// 
    pub fn integrate(&self, rate: &Vector, dt: f32) -> Quaternion {
        let derivative = self * Quaternion::from_parts(0.0, *rate);
        *self + derivative * (0.5 * dt)
    }

    /// Approximate equality check with a given tolerance.
    /// 
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        approx_eq(self.w, other.w, tol)
            && approx_eq(self.x, other.x, tol)
            && approx_eq(self.y, other.y, tol)
            && approx_eq(self.z, other.z, tol)
    }

    /// Quaternion (Hamilton) multiplication.
    /// 
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}

impl Add for Quaternion
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Quaternion {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Mul<f32> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
