//! Immutable per-session configuration.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{CascadeError, Result};
use crate::{DEFAULT_REFERENCE_IMPEDANCE, SPEED_OF_LIGHT};

/// Operating point shared by every component in a session.
///
/// Components take the context by reference at construction, so a component
/// cannot exist without a frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionContext {
    frequency: f64,
    speed_of_light: f64,
    reference_impedance: Complex64,
}

impl SessionContext {
    /// Create a context for `frequency` Hz with a 50 Ω reference.
    pub fn new(frequency: f64) -> Result<Self> {
        validate_frequency(frequency)?;
        Ok(Self {
            frequency,
            speed_of_light: SPEED_OF_LIGHT,
            reference_impedance: DEFAULT_REFERENCE_IMPEDANCE,
        })
    }

    /// Set the reference impedance used for Γ and SWR.
    pub fn with_reference_impedance(mut self, reference: Complex64) -> Result<Self> {
        if !reference.is_finite() || (reference.re == 0.0 && reference.im == 0.0) {
            return Err(CascadeError::InvalidReference {
                re: reference.re,
                im: reference.im,
            });
        }
        self.reference_impedance = reference;
        Ok(self)
    }

    /// Same context at a different frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Result<Self> {
        validate_frequency(frequency)?;
        self.frequency = frequency;
        Ok(self)
    }

    /// Operating frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Speed of light in m/s.
    pub fn speed_of_light(&self) -> f64 {
        self.speed_of_light
    }

    /// Reference impedance for matching calculations.
    pub fn reference_impedance(&self) -> Complex64 {
        self.reference_impedance
    }

    /// Angular frequency ω = 2πf in rad/s.
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency
    }

    /// Free-space wavelength λ = c/f in meters.
    pub fn wavelength(&self) -> f64 {
        self.speed_of_light / self.frequency
    }

    /// Free-space wavenumber k = 2πf/c in rad/m.
    pub fn wavenumber(&self) -> f64 {
        self.angular_frequency() / self.speed_of_light
    }
}

fn validate_frequency(frequency: f64) -> Result<()> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(CascadeError::InvalidFrequency { value: frequency });
    }
    Ok(())
}
