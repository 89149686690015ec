/// Magnitudes at or below this are treated as zero when something needs to be normalized.
/// 
pub const NORM_EPSILON: f32 = 1e-6;

/// Approximate equality check with a given tolerance.
/// 
#[inline]
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    libm::fabsf(a - b) <= tol
}

/// Does the magnitude count as zero? NaN magnitudes also count, you cannot divide by them either.
/// 
#[inline]
pub fn is_near_zero(magnitude: f32) -> bool {
    magnitude.is_nan() || magnitude <= NORM_EPSILON
}
