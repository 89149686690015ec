use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use crate::*;

/// Plain 3D vector, used both for sensor readings in the device frame and for the kinematic
/// quantities (acceleration, velocity, position) in the world frame.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector
{
    pub x: f32, 
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl Vector 
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    /// 
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculate the length/magnitude of the vector
    /// 
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Euclidean distance between two points.
    /// 
    pub fn distance(&self, other: &Vector) -> f32 {
        (*other - *self).magnitude()
    }

    /// Scale the vector to unit length, or `None` when its magnitude is (close to) zero and there
    /// is no direction to keep.
    /// 
    pub fn try_normalize(&self) -> Option<Vector> {
        let len = self.magnitude();
        if is_near_zero(len) {
            return None;
        }
        Some(*self / len)
    }

    /// Take the dot product of two vectors.
    /// 
    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    /// 
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        approx_eq(self.x, other.x, tol)
            && approx_eq(self.y, other.y, tol)
            && approx_eq(self.z, other.z, tol)
    }

    /// Arithmetic mean of a set of vectors, `None` for an empty set.
    /// 
    pub fn mean<'a, I>(vectors: I) -> Option<Vector>
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut sum = Vector::zero();
        let mut count = 0usize;
        for v in vectors {
            sum += *v;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(sum / count as f32)
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Vector
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Div<f32> for Vector
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl MulAssign<f32> for Vector
{
    fn mul_assign(&mut self, other: f32) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
