//! 2D vector types for plane geometry
//!
//! `Vector2` is a plain value type: every operation returns a new vector.
//! Rotations go through `Mat2`, the same way a 3D mesh transform goes through
//! a rotation matrix instead of hand-expanded trigonometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// `sqrt(x^2 + y^2)`, without underflow for tiny components
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate counterclockwise by `angle` radians about the origin
    pub fn rotated(self, angle: f64) -> Self {
        Mat2::rotation(angle).multiply_vector(self)
    }

    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self { x: 0.0, y: 0.0 }
        } else {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        }
    }

    /// Component-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vector2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2 { x, y }
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A 2x2 row-major matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub m: [[f64; 2]; 2],
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat2 {
    pub const fn identity() -> Self {
        Mat2 {
            m: [[1.0, 0.0], [0.0, 1.0]],
        }
    }

    /// Counterclockwise rotation by `angle` radians
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Mat2 {
            m: [[cos, -sin], [sin, cos]],
        }
    }

    pub fn multiply_vector(&self, v: Vector2) -> Vector2 {
        Vector2 {
            x: self.m[0][0] * v.x + self.m[0][1] * v.y,
            y: self.m[1][0] * v.x + self.m[1][1] * v.y,
        }
    }
}

/// Matrix product, `(a * b).multiply_vector(v) == a.multiply_vector(b.multiply_vector(v))`
impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Mat2 {
            m: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
        }
    }
}

/// Euclidean norm of `v`
pub fn length(v: Vector2) -> f64 {
    v.length()
}

/// Rotate `v` counterclockwise by `r` radians about the origin
pub fn rotvec(v: Vector2, r: f64) -> Vector2 {
    v.rotated(r)
}

/// Dot product of `a` and `b`
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.dot(&b)
}
