//! Checked complex arithmetic for impedance/admittance conversions.

use num_complex::Complex64;

use crate::error::{CascadeError, Result};

/// Imaginary unit `j`.
pub const J: Complex64 = Complex64::new(0.0, 1.0);

/// Divide `numerator` by `denominator`, reporting a zero denominator (or a
/// non-finite quotient) as a domain fault naming `operation`.
pub fn checked_div(numerator: Complex64, denominator: Complex64, operation: &str) -> Result<Complex64> {
    if denominator.re == 0.0 && denominator.im == 0.0 {
        return Err(CascadeError::divide_by_zero(operation));
    }
    let quotient = numerator / denominator;
    if !quotient.is_finite() {
        return Err(CascadeError::divide_by_zero(operation));
    }
    Ok(quotient)
}

/// `1 / value`: impedance to admittance or back.
pub fn reciprocal(value: Complex64, operation: &str) -> Result<Complex64> {
    checked_div(Complex64::new(1.0, 0.0), value, operation)
}
