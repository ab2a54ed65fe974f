//! Math helpers
//!
//! This module provides:
//! - 2D vectors and rotation matrices (vec submodule)
//! - Exponential, factorial and gamma (scalar submodule)
//! - Binomial coefficients (combinatorics submodule)

mod combinatorics;
mod error;
mod scalar;
mod vec;

pub use combinatorics::*;
pub use error::*;
pub use scalar::*;
pub use vec::*;

/// Tolerance for comparing results that went through trigonometry or division.
pub const DEFAULT_EPSILON: f64 = 1e-9;
