//! Lumped passive components: Resistor, Capacitor, Inductor.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::{require_positive, ComponentKind, Placement};
use crate::error::{CascadeError, Result};
use crate::notation::format_g4;
use crate::solver::SessionContext;

/// A resistor component.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    resistance: f64,
    placement: Placement,
}

impl Resistor {
    /// Create a new resistor. Zero ohms is allowed.
    pub fn new(resistance: f64, placement: Placement) -> Result<Self> {
        if !resistance.is_finite() || resistance < 0.0 {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::Resistor,
                "resistance",
                resistance,
                "must be zero or greater",
            ));
        }
        Ok(Self {
            resistance,
            placement,
        })
    }

    /// Resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Series or shunt.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Element impedance `R + j0`.
    pub fn impedance(&self) -> Complex64 {
        Complex64::new(self.resistance, 0.0)
    }

    /// Summary line, e.g. `R1:       25 Ω`.
    pub fn describe(&self, ordinal: usize) -> String {
        format!("R{}: {} Ω", ordinal, format_g4(self.resistance))
    }
}

/// A capacitor component.
///
/// Its reactance is fixed at construction from the session frequency:
///   X_C = 1 / (2π f C)
/// and it contributes `-jX_C` in series, `+j/X_C` (= jωC) of admittance in shunt.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    capacitance: f64,
    frequency: f64,
    reactance: f64,
    placement: Placement,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(capacitance: f64, placement: Placement, context: &SessionContext) -> Result<Self> {
        let capacitance = require_positive(ComponentKind::Capacitor, "capacitance", capacitance)?;
        let frequency = context.frequency();
        let reactance = 1.0 / (2.0 * PI * frequency * capacitance);
        if !reactance.is_finite() {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::Capacitor,
                "capacitance",
                capacitance,
                "reactance is not representable",
            ));
        }
        Ok(Self {
            capacitance,
            frequency,
            reactance,
            placement,
        })
    }

    /// Capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Frequency the reactance was computed at.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Magnitude of the capacitive reactance in ohms.
    pub fn reactance(&self) -> f64 {
        self.reactance
    }

    /// Series or shunt.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Element impedance `-jX_C`.
    pub fn impedance(&self) -> Complex64 {
        Complex64::new(0.0, -self.reactance)
    }

    /// Summary line, e.g. `C1:    1e-11 F	X: -   159.2j`.
    pub fn describe(&self, ordinal: usize) -> String {
        format!(
            "C{}: {} F\tX: -{}j",
            ordinal,
            format_g4(self.capacitance),
            format_g4(self.reactance)
        )
    }
}

/// An inductor component.
///
/// Its reactance is fixed at construction from the session frequency:
///   X_L = 2π f L
/// and it contributes `+jX_L` in series, `1/(jX_L)` (= -j/X_L) of admittance in shunt.
#[derive(Debug, Clone, PartialEq)]
pub struct Inductor {
    inductance: f64,
    frequency: f64,
    reactance: f64,
    placement: Placement,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(inductance: f64, placement: Placement, context: &SessionContext) -> Result<Self> {
        let inductance = require_positive(ComponentKind::Inductor, "inductance", inductance)?;
        let frequency = context.frequency();
        let reactance = 2.0 * PI * frequency * inductance;
        if !reactance.is_finite() || reactance == 0.0 {
            return Err(CascadeError::invalid_parameter(
                ComponentKind::Inductor,
                "inductance",
                inductance,
                "reactance is not representable",
            ));
        }
        Ok(Self {
            inductance,
            frequency,
            reactance,
            placement,
        })
    }

    /// Inductance in henries.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Frequency the reactance was computed at.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Inductive reactance in ohms.
    pub fn reactance(&self) -> f64 {
        self.reactance
    }

    /// Series or shunt.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Element impedance `+jX_L`.
    pub fn impedance(&self) -> Complex64 {
        Complex64::new(0.0, self.reactance)
    }

    /// Summary line, e.g. `L1:    1e-07 H	X: +   62.83j`.
    pub fn describe(&self, ordinal: usize) -> String {
        format!(
            "L{}: {} H\tX: +{}j",
            ordinal,
            format_g4(self.inductance),
            format_g4(self.reactance)
        )
    }
}
