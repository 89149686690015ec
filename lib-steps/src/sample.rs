use math::{Vector, DEG_TO_RAD};

/// One raw reading of the IMU. Acceleration is in units of g, angular rate in degrees per second,
/// both in the device (body) frame.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImuSample
{
    pub ax: f32,
    pub ay: f32,
    pub az: f32,
    pub gx: f32,
    pub gy: f32,
    pub gz: f32,
}

impl ImuSample
{
    pub const fn new(accel: Vector, gyro: Vector) -> Self {
        ImuSample {
            ax: accel.x,
            ay: accel.y,
            az: accel.z,
            gx: gyro.x,
            gy: gyro.y,
            gz: gyro.z,
        }
    }

    /// Accelerometer reading in g.
    #[inline]
    pub fn accel(&self) -> Vector {
        Vector::new(self.ax, self.ay, self.az)
    }

    /// Gyroscope reading in deg/s.
    #[inline]
    pub fn gyro(&self) -> Vector {
        Vector::new(self.gx, self.gy, self.gz)
    }

    /// Gyroscope reading converted to rad/s.
    #[inline]
    pub fn gyro_radians(&self) -> Vector {
        self.gyro() * DEG_TO_RAD
    }

    /// Magnitude of the accelerometer reading, in g.
    pub fn accel_magnitude(&self) -> f64 {
        let (ax, ay, az) = (self.ax as f64, self.ay as f64, self.az as f64);
        libm::sqrt(ax * ax + ay * ay + az * az)
    }
}

impl From<[f32; 6]> for ImuSample {
    fn from(values: [f32; 6]) -> Self {
        ImuSample {
            ax: values[0],
            ay: values[1],
            az: values[2],
            gx: values[3],
            gy: values[4],
            gz: values[5],
        }
    }
}
