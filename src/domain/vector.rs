use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// World-space 3-component vector.
///
/// A plain value type: every operation returns a new vector and none of them
/// can fail. Normalizing a zero-length vector yields [`Vec3::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero-length input.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 {
            self.scale(1.0 / len)
        } else {
            Vec3::ZERO
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vec3) -> f64 {
        self.sub(other).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

/// Affine transform stored as the top three rows of a 4x4 matrix.
///
/// The bottom row of a bindpose is always `[0, 0, 0, 1]`, so it is not kept.
/// Serialized as a bare `[[f64; 4]; 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat3x4 {
    pub rows: [[f64; 4]; 3],
}

impl Mat3x4 {
    pub const IDENTITY: Mat3x4 = Mat3x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    pub const fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        Self { rows }
    }

    /// Applies rotation/scale and then the translation column.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let row = |r: &[f64; 4]| r[0] * p.x + r[1] * p.y + r[2] * p.z + r[3];
        Vec3::new(row(&self.rows[0]), row(&self.rows[1]), row(&self.rows[2]))
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }
}

impl Default for Mat3x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Orthonormal camera axes in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraBasis {
    /// Level camera turned by `yaw` radians, matching `atan2(dx, dz)` headings.
    pub fn from_yaw(yaw: f64) -> Self {
        let (sin, cos) = yaw.sin_cos();
        Self {
            forward: Vec3::new(sin, 0.0, cos),
            right: Vec3::new(cos, 0.0, -sin),
            up: Vec3::new(0.0, 1.0, 0.0),
        }
    }

    /// Projects `v` onto the axes: `(right, up, forward)` components.
    pub fn world_to_camera(&self, v: Vec3) -> Vec3 {
        Vec3::new(dot(v, self.right), dot(v, self.up), dot(v, self.forward))
    }

    pub fn camera_to_world(&self, local: Vec3) -> Vec3 {
        self.right * local.x + self.up * local.y + self.forward * local.z
    }
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}
