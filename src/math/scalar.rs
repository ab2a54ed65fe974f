//! Scalar functions: exponential, factorial and the gamma function.
//!
//! `gamma` uses the Lanczos approximation with g = 7 and nine coefficients,
//! which is accurate to roughly 15 significant digits for positive arguments.

use crate::math::MathError;
use log::debug;
use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Largest argument for which `gamma` is still below `f64::MAX`.
pub const GAMMA_OVERFLOW: f64 = 171.624_376_956_302_7;

/// e raised to the power `x`. Large `x` overflows to infinity.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Checks that `value` is a finite, non-negative integer.
pub(crate) fn check_natural(
    function: &'static str,
    name: &str,
    value: f64,
) -> Result<(), MathError> {
    let reason = if !value.is_finite() {
        format!("{name} ({value}) is not finite")
    } else if value < 0.0 {
        format!("{name} ({value}) is negative")
    } else if value.fract() != 0.0 {
        format!("{name} ({value}) is not an integer")
    } else {
        return Ok(());
    };
    debug!("{function}: rejecting {name} = {value}");
    Err(MathError::invalid_argument(function, reason))
}

/// `n!` for a non-negative integer `n`.
///
/// Anything past `170!` overflows to infinity.
pub fn factorial(n: f64) -> Result<f64, MathError> {
    check_natural("factorial", "n", n)?;
    let mut result: f64 = 1.0;
    let mut i = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

/// The gamma function for real arguments.
///
/// Non-positive integers are poles and return NaN. Arguments above
/// `GAMMA_OVERFLOW` return infinity.
pub fn gamma(x: f64) -> f64 {
    if x <= 0.0 && x.fract() == 0.0 {
        f64::NAN
    } else if x > GAMMA_OVERFLOW {
        f64::INFINITY
    } else if x < 0.5 {
        // reflection formula
        PI / ((PI * x).sin() * gamma(1.0 - x))
    } else {
        let x = x - 1.0;
        let mut sum = LANCZOS_COEFFICIENTS[0];
        for (i, c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
            sum += c / (x + i as f64);
        }
        let t = x + LANCZOS_G + 0.5;
        // t^(x + 0.5) alone overflows well before gamma itself does
        let half_power = t.powf((x + 0.5) / 2.0);
        (2.0 * PI).sqrt() * half_power * (-t).exp() * half_power * sum
    }
}
