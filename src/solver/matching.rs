//! Reflection coefficient, SWR and the evaluation report.

use std::fmt;

use num_complex::Complex64;

use super::cascade::fold;
use super::context::SessionContext;
use super::SWR_UNITY_TOLERANCE;
use crate::circuit::Circuit;
use crate::error::{CascadeError, Result};
use crate::math::checked_div;
use crate::notation::format_complex;

/// Γ = (Zref - Zout) / (Zref + Zout).
///
/// Fails with a domain fault when `z_out == -z_ref`.
pub fn reflection_coefficient(z_out: Complex64, z_ref: Complex64) -> Result<Complex64> {
    checked_div(z_ref - z_out, z_ref + z_out, "reflection coefficient Zref + Zout")
}

/// SWR = (1 + |Γ|) / (1 - |Γ|).
///
/// Total reflection (|Γ| ≥ 1) has no finite SWR and is reported as
/// [`CascadeError::UnboundedSwr`].
pub fn standing_wave_ratio(gamma: Complex64) -> Result<f64> {
    let magnitude = gamma.norm();
    if !magnitude.is_finite() || magnitude >= 1.0 - SWR_UNITY_TOLERANCE {
        return Err(CascadeError::UnboundedSwr { magnitude });
    }
    Ok((1.0 + magnitude) / (1.0 - magnitude))
}

/// Result of evaluating a circuit against a load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Impedance looking into the source end
    pub output_impedance: Complex64,
    /// Γ relative to `reference_impedance`
    pub reflection_coefficient: Complex64,
    /// Standing-wave ratio (≥ 1)
    pub swr: f64,
    /// Reference used for Γ and SWR
    pub reference_impedance: Complex64,
}

impl Evaluation {
    /// Output impedance as `a±bj` with 2 decimals.
    pub fn impedance_text(&self) -> String {
        format_complex(self.output_impedance, 2)
    }

    /// Reflection coefficient as `a±bj` with 2 decimals.
    pub fn reflection_text(&self) -> String {
        format_complex(self.reflection_coefficient, 2)
    }

    /// SWR as `X.X:1`.
    pub fn swr_text(&self) -> String {
        format!("{:.1}:1", self.swr)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Impedance at Z₀: {} Ω", self.impedance_text())?;
        writeln!(f, "Reflection coefficient: {}", self.reflection_text())?;
        write!(
            f,
            "SWR relative to {} Ω: {}",
            format_complex(self.reference_impedance, 2),
            self.swr_text()
        )
    }
}

/// Fold `z_load` through `circuit` and compute Γ and SWR against the
/// context's reference impedance.
pub fn evaluate(z_load: Complex64, circuit: &Circuit, context: &SessionContext) -> Result<Evaluation> {
    let output_impedance = fold(z_load, circuit)?;
    let reference_impedance = context.reference_impedance();
    let reflection_coefficient = reflection_coefficient(output_impedance, reference_impedance)?;
    let swr = standing_wave_ratio(reflection_coefficient)?;
    Ok(Evaluation {
        output_impedance,
        reflection_coefficient,
        swr,
        reference_impedance,
    })
}
