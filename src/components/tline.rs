//! Lossless transmission line segment.
//!
//! A line of characteristic impedance Z0 and electrical length l, terminated
//! in Zin, presents
//!
//! ```text
//! Zout = Z0 * (Zin + j Z0 tan(kl)) / (Z0 + j Zin tan(kl))
//! ```
//!
//! where k = 2π f / c and l = physical length × velocity factor. Only series
//! insertion is modelled; stubs are not.

use num_complex::Complex64;

use super::{require_positive, ComponentKind, Placement};
use crate::error::{CascadeError, Result};
use crate::math::{checked_div, J};
use crate::notation::{format_complex_g, format_g4};
use crate::solver::SessionContext;

/// A series transmission line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionLine {
    /// Physical length in meters
    length: f64,
    characteristic_impedance: Complex64,
    velocity_factor: f64,
    frequency: f64,
    /// Free-space wavenumber 2πf/c in rad/m
    wavenumber: f64,
    /// Free-space wavelength c/f in meters
    wavelength: f64,
}

impl TransmissionLine {
    /// Create a new transmission line.
    ///
    /// # Arguments
    /// * `length` - Physical length in meters (> 0)
    /// * `characteristic_impedance` - Z0 in ohms (non-zero)
    /// * `velocity_factor` - Propagation speed as a fraction of c, in (0, 1]
    /// * `placement` - Must be [`Placement::Series`]
    pub fn new(
        length: f64,
        characteristic_impedance: Complex64,
        velocity_factor: f64,
        placement: Placement,
        context: &SessionContext,
    ) -> Result<Self> {
        if placement == Placement::Shunt {
            return Err(CascadeError::UnsupportedConfiguration {
                component: ComponentKind::TransmissionLine,
                placement,
            });
        }

        let length = require_positive(ComponentKind::TransmissionLine, "length", length)?;

        let velocity_factor =
            require_positive(ComponentKind::TransmissionLine, "velocity factor", velocity_factor)?;
        if velocity_factor > 1.0 {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::TransmissionLine,
                "velocity factor",
                velocity_factor,
                "must not exceed 1",
            ));
        }

        if !characteristic_impedance.is_finite() {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::TransmissionLine,
                "characteristic impedance",
                characteristic_impedance.norm(),
                "must be finite",
            ));
        }
        if characteristic_impedance.re == 0.0 && characteristic_impedance.im == 0.0 {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::TransmissionLine,
                "characteristic impedance",
                0.0,
                "must be non-zero",
            ));
        }

        Ok(Self {
            length,
            characteristic_impedance,
            velocity_factor,
            frequency: context.frequency(),
            wavenumber: context.wavenumber(),
            wavelength: context.wavelength(),
        })
    }

    /// Physical length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Characteristic impedance Z0.
    pub fn characteristic_impedance(&self) -> Complex64 {
        self.characteristic_impedance
    }

    /// Velocity factor.
    pub fn velocity_factor(&self) -> f64 {
        self.velocity_factor
    }

    /// Frequency the line was built for.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Always series.
    pub fn placement(&self) -> Placement {
        Placement::Series
    }

    /// Electrical length (physical length × velocity factor) in meters.
    pub fn electrical_length(&self) -> f64 {
        self.length * self.velocity_factor
    }

    /// Electrical length in free-space wavelengths.
    pub fn wavelengths(&self) -> f64 {
        self.electrical_length() / self.wavelength
    }

    /// Phase delay kl in radians.
    pub fn electrical_angle(&self) -> f64 {
        self.wavenumber * self.electrical_length()
    }

    /// Impedance seen at the near end with `z_in` at the far end.
    pub fn transform(&self, z_in: Complex64) -> Result<Complex64> {
        let z0 = self.characteristic_impedance;
        let t = self.electrical_angle().tan();
        let numerator = z_in + J * z0 * t;
        let denominator = z0 + J * z_in * t;
        let ratio = checked_div(numerator, denominator, "line input impedance Z0 + jZin·tan(kl)")?;
        Ok(z0 * ratio)
    }

    /// Summary line, e.g. `T1: 50+0j Ω	  0.7495 m	    0.25 λ`.
    pub fn describe(&self, ordinal: usize) -> String {
        format!(
            "T{}: {} Ω\t{} m\t{} λ",
            ordinal,
            format_complex_g(self.characteristic_impedance, 4),
            format_g4(self.electrical_length()),
            format_g4(self.wavelengths())
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FaultKind;
    use crate::SPEED_OF_LIGHT;

    fn line(length: f64, z0: Complex64, vf: f64, frequency: f64) -> TransmissionLine {
        let ctx = SessionContext::new(frequency).unwrap();
        TransmissionLine::new(length, z0, vf, Placement::Series, &ctx).unwrap()
    }

    #[test]
    fn test_matched_line_is_transparent() {
        let z0 = Complex64::new(50.0, 0.0);
        for (length, frequency) in [(0.1, 1e6), (1.37, 100e6), (12.0, 2.4e9), (0.75, 433e6)] {
            let out = line(length, z0, 0.8, frequency).transform(z0).unwrap();
            assert_relative_eq!(out.re, 50.0, epsilon = 1e-9);
            assert_relative_eq!(out.im, 0.0, epsilon = 1e-9);
        }

        let z0 = Complex64::new(75.0, -3.0);
        let out = line(2.2, z0, 0.66, 150e6).transform(z0).unwrap();
        assert_relative_eq!(out.re, z0.re, epsilon = 1e-9);
        assert_relative_eq!(out.im, z0.im, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_wave_transformer() {
        let frequency = 100e6;
        let quarter = SPEED_OF_LIGHT / frequency / 4.0;
        let tl = line(quarter, Complex64::new(50.0, 0.0), 1.0, frequency);
        assert_relative_eq!(tl.electrical_angle(), PI / 2.0, epsilon = 1e-12);

        for load in [100.0, 25.0, 12.5, 200.0] {
            let out = tl.transform(Complex64::new(load, 0.0)).unwrap();
            assert_relative_eq!(out.re, 2500.0 / load, max_relative = 1e-9);
            assert_relative_eq!(out.im, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_velocity_factor_shortens_wavelength() {
        // vf = 0.5 doubles the physical length needed for a quarter wave.
        let frequency = 50e6;
        let tl = line(SPEED_OF_LIGHT / frequency / 2.0, Complex64::new(50.0, 0.0), 0.5, frequency);
        assert_relative_eq!(tl.wavelengths(), 0.25, epsilon = 1e-12);
        let out = tl.transform(Complex64::new(100.0, 0.0)).unwrap();
        assert_relative_eq!(out.re, 25.0, max_relative = 1e-9);
    }

    #[test]
    fn test_half_wave_repeats_load() {
        let frequency = 300e6;
        let tl = line(SPEED_OF_LIGHT / frequency / 2.0, Complex64::new(50.0, 0.0), 1.0, frequency);
        let load = Complex64::new(30.0, -40.0);
        let out = tl.transform(load).unwrap();
        assert_relative_eq!(out.re, load.re, epsilon = 1e-9);
        assert_relative_eq!(out.im, load.im, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_construction() {
        let ctx = SessionContext::new(100e6).unwrap();
        let z0 = Complex64::new(50.0, 0.0);

        let err = TransmissionLine::new(1.0, z0, 1.0, Placement::Shunt, &ctx).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Unsupported);

        for (length, z0, vf) in [
            (0.0, z0, 1.0),
            (-1.0, z0, 1.0),
            (1.0, z0, 0.0),
            (1.0, z0, 1.01),
            (1.0, Complex64::new(0.0, 0.0), 1.0),
            (1.0, Complex64::new(f64::NAN, 0.0), 1.0),
        ] {
            let err = TransmissionLine::new(length, z0, vf, Placement::Series, &ctx).unwrap_err();
            assert_eq!(err.kind(), FaultKind::Validation);
        }
    }

    #[test]
    fn test_describe_format() {
        let frequency = 100e6;
        let tl = line(SPEED_OF_LIGHT / frequency / 4.0, Complex64::new(50.0, 0.0), 1.0, frequency);
        assert_eq!(tl.describe(1), "T1: 50+0j Ω\t  0.7495 m\t    0.25 λ");
    }
}
