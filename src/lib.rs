//!
//! Calcmath is a small library of scalar and 2D vector helpers.
//!
//! It provides the handful of functions a calculator needs for plane geometry and counting:
//! vector length, rotation and dot product, the exponential and the binomial coefficient.
//!
//! ```
//! use calcmath::{Vector2, dot, length, ncr, rotvec};
//!
//! assert_eq!(length(Vector2::new(3.0, 4.0)), 5.0);
//! assert_eq!(dot(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)), 0.0);
//! assert_eq!(ncr(5.0, 2.0).unwrap(), 10.0);
//! let up = rotvec(Vector2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
//! assert!(up.approx_eq(&Vector2::new(0.0, 1.0), calcmath::DEFAULT_EPSILON));
//! ```

pub mod math;

pub use math::*;
