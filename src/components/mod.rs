//! Component models for the impedance cascade.
//!
//! This module provides the four supported element kinds:
//! - Lumped: Resistor, Capacitor, Inductor (series or shunt)
//! - Distributed: TransmissionLine (series only)
//!
//! Every component transforms the impedance presented at its far terminal
//! into the impedance seen at its near terminal. Series elements add their
//! impedance; shunt elements add their admittance:
//!
//! ```text
//! series:  Zout = Zin + Ze
//! shunt:   Zout = 1 / (1/Zin + 1/Ze)
//! ```

mod lumped;
mod tline;

pub use lumped::{Capacitor, Inductor, Resistor};
pub use tline::TransmissionLine;

use std::fmt;

use num_complex::Complex64;

use crate::error::{CascadeError, Result};
use crate::math::reciprocal;
use crate::solver::SessionContext;

/// How a component is inserted into the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// In the signal path; impedances add
    Series,
    /// Across the line to ground; admittances add
    Shunt,
}

impl Placement {
    /// Parse a placement answer. Anything containing `sh` is shunt, anything
    /// containing `se` is series (case-insensitive).
    pub fn parse(input: &str) -> Result<Self> {
        let lower = input.to_lowercase();
        if lower.contains("sh") {
            Ok(Self::Shunt)
        } else if lower.contains("se") {
            Ok(Self::Series)
        } else {
            Err(CascadeError::PlacementSyntax {
                input: input.to_string(),
            })
        }
    }

    /// Check if this is shunt placement.
    pub fn is_shunt(&self) -> bool {
        *self == Self::Shunt
    }

    /// Fold `z_in` through an element of impedance `z_element` placed this way.
    pub fn apply(self, z_in: Complex64, z_element: Complex64) -> Result<Complex64> {
        match self {
            Self::Series => Ok(z_in + z_element),
            Self::Shunt => {
                let y_in = reciprocal(z_in, "admittance of incoming impedance 1/Zin")?;
                let y_element = reciprocal(z_element, "admittance of shunt element 1/Ze")?;
                reciprocal(y_in + y_element, "impedance of combined admittance 1/(Yin+Ye)")
            }
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => write!(f, "series"),
            Self::Shunt => write!(f, "shunt"),
        }
    }
}

/// Component variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Capacitor
    Capacitor,
    /// Inductor
    Inductor,
    /// Resistor
    Resistor,
    /// Transmission line segment
    TransmissionLine,
}

impl ComponentKind {
    /// All kinds, in menu order.
    pub const ALL: [ComponentKind; 4] = [
        Self::Capacitor,
        Self::Inductor,
        Self::Resistor,
        Self::TransmissionLine,
    ];

    /// Single-letter tag used in labels (`C1`, `T2`, ...).
    pub fn tag(&self) -> char {
        match self {
            Self::Capacitor => 'C',
            Self::Inductor => 'L',
            Self::Resistor => 'R',
            Self::TransmissionLine => 'T',
        }
    }

    /// Parse a kind from its tag letter.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'C' => Some(Self::Capacitor),
            'L' => Some(Self::Inductor),
            'R' => Some(Self::Resistor),
            'T' => Some(Self::TransmissionLine),
            _ => None,
        }
    }

    /// Whether the kind may be placed in shunt.
    pub fn supports_shunt(&self) -> bool {
        !matches!(self, Self::TransmissionLine)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacitor => write!(f, "capacitor"),
            Self::Inductor => write!(f, "inductor"),
            Self::Resistor => write!(f, "resistor"),
            Self::TransmissionLine => write!(f, "transmission line"),
        }
    }
}

/// Numeric parameters of a component, in base SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentParams {
    /// Capacitance in farads
    Capacitor { capacitance: f64 },
    /// Inductance in henries
    Inductor { inductance: f64 },
    /// Resistance in ohms
    Resistor { resistance: f64 },
    /// Physical length in meters, characteristic impedance in ohms,
    /// velocity factor as a fraction of c
    TransmissionLine {
        length: f64,
        characteristic_impedance: Complex64,
        velocity_factor: f64,
    },
}

impl ComponentParams {
    /// The kind these parameters describe.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Capacitor { .. } => ComponentKind::Capacitor,
            Self::Inductor { .. } => ComponentKind::Inductor,
            Self::Resistor { .. } => ComponentKind::Resistor,
            Self::TransmissionLine { .. } => ComponentKind::TransmissionLine,
        }
    }
}

/// An unvalidated request to build a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDef {
    /// Variant and its numeric parameters
    pub params: ComponentParams,
    /// Series or shunt
    pub placement: Placement,
}

impl ComponentDef {
    /// Create a component definition.
    pub fn new(params: ComponentParams, placement: Placement) -> Self {
        Self { params, placement }
    }
}

/// A validated, immutable circuit component.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Capacitor(Capacitor),
    Inductor(Inductor),
    Resistor(Resistor),
    TransmissionLine(TransmissionLine),
}

impl Component {
    /// Create a component from a definition at the session's frequency.
    pub fn from_def(def: &ComponentDef, context: &SessionContext) -> Result<Self> {
        match def.params {
            ComponentParams::Capacitor { capacitance } => Ok(Component::Capacitor(Capacitor::new(
                capacitance,
                def.placement,
                context,
            )?)),

            ComponentParams::Inductor { inductance } => Ok(Component::Inductor(Inductor::new(
                inductance,
                def.placement,
                context,
            )?)),

            ComponentParams::Resistor { resistance } => {
                Ok(Component::Resistor(Resistor::new(resistance, def.placement)?))
            }

            ComponentParams::TransmissionLine {
                length,
                characteristic_impedance,
                velocity_factor,
            } => Ok(Component::TransmissionLine(TransmissionLine::new(
                length,
                characteristic_impedance,
                velocity_factor,
                def.placement,
                context,
            )?)),
        }
    }

    /// Get the variant tag.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Capacitor(_) => ComponentKind::Capacitor,
            Component::Inductor(_) => ComponentKind::Inductor,
            Component::Resistor(_) => ComponentKind::Resistor,
            Component::TransmissionLine(_) => ComponentKind::TransmissionLine,
        }
    }

    /// Get the placement.
    pub fn placement(&self) -> Placement {
        match self {
            Component::Capacitor(c) => c.placement(),
            Component::Inductor(l) => l.placement(),
            Component::Resistor(r) => r.placement(),
            Component::TransmissionLine(t) => t.placement(),
        }
    }

    /// Frequency the component was built for, if its behavior depends on one.
    pub fn frequency(&self) -> Option<f64> {
        match self {
            Component::Capacitor(c) => Some(c.frequency()),
            Component::Inductor(l) => Some(l.frequency()),
            Component::Resistor(_) => None,
            Component::TransmissionLine(t) => Some(t.frequency()),
        }
    }

    /// Label such as `C1` for the `ordinal`-th component of this kind.
    pub fn label(&self, ordinal: usize) -> String {
        format!("{}{}", self.kind().tag(), ordinal)
    }

    /// One-line summary; `ordinal` is the 1-based count among components of the same kind.
    pub fn describe(&self, ordinal: usize) -> String {
        match self {
            Component::Capacitor(c) => c.describe(ordinal),
            Component::Inductor(l) => l.describe(ordinal),
            Component::Resistor(r) => r.describe(ordinal),
            Component::TransmissionLine(t) => t.describe(ordinal),
        }
    }

    /// Impedance seen looking into this component with `z_in` behind it.
    pub fn transform(&self, z_in: Complex64) -> Result<Complex64> {
        match self {
            Component::Capacitor(c) => c.placement().apply(z_in, c.impedance()),
            Component::Inductor(l) => l.placement().apply(z_in, l.impedance()),
            Component::Resistor(r) => r.placement().apply(z_in, r.impedance()),
            Component::TransmissionLine(t) => t.transform(z_in),
        }
    }
}

/// Validate that `value` is finite and strictly positive.
pub(crate) fn require_positive(kind: ComponentKind, param: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CascadeError::invalid_parameter(kind, param, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(CascadeError::invalid_parameter(kind, param, value, "must be greater than zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FaultKind;

    fn context() -> SessionContext {
        SessionContext::new(100e6).unwrap()
    }

    #[test]
    fn test_placement_parse() {
        assert_eq!(Placement::parse("Shunt").unwrap(), Placement::Shunt);
        assert_eq!(Placement::parse("sh").unwrap(), Placement::Shunt);
        assert_eq!(Placement::parse("SERIES").unwrap(), Placement::Series);
        assert!(matches!(
            Placement::parse("parallel"),
            Err(CascadeError::PlacementSyntax { .. })
        ));
    }

    #[test]
    fn test_kind_tags() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ComponentKind::from_tag('t'), Some(ComponentKind::TransmissionLine));
        assert_eq!(ComponentKind::from_tag('x'), None);
    }

    #[test]
    fn test_from_def_builds_each_variant() {
        let ctx = context();
        let defs = [
            ComponentDef::new(ComponentParams::Capacitor { capacitance: 10e-12 }, Placement::Shunt),
            ComponentDef::new(ComponentParams::Inductor { inductance: 100e-9 }, Placement::Series),
            ComponentDef::new(ComponentParams::Resistor { resistance: 25.0 }, Placement::Series),
            ComponentDef::new(
                ComponentParams::TransmissionLine {
                    length: 0.5,
                    characteristic_impedance: Complex64::new(50.0, 0.0),
                    velocity_factor: 0.66,
                },
                Placement::Series,
            ),
        ];
        for def in &defs {
            let component = Component::from_def(def, &ctx).unwrap();
            assert_eq!(component.kind(), def.params.kind());
            assert_eq!(component.placement(), def.placement);
        }
    }

    #[test]
    fn test_zero_capacitance_is_validation_fault() {
        let def = ComponentDef::new(ComponentParams::Capacitor { capacitance: 0.0 }, Placement::Series);
        let err = Component::from_def(&def, &context()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Validation);
        assert!(matches!(
            err,
            CascadeError::InvalidParameter {
                component: ComponentKind::Capacitor,
                param: "capacitance",
                ..
            }
        ));
    }

    #[test]
    fn test_shunt_transmission_line_is_unsupported() {
        let def = ComponentDef::new(
            ComponentParams::TransmissionLine {
                length: 1.0,
                characteristic_impedance: Complex64::new(50.0, 0.0),
                velocity_factor: 1.0,
            },
            Placement::Shunt,
        );
        let err = Component::from_def(&def, &context()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Unsupported);
        assert!(!ComponentKind::TransmissionLine.supports_shunt());
    }

    #[test]
    fn test_shunt_is_admittance_dual_of_series() {
        // A series element in front of a short exposes its own impedance Ze.
        let ctx = context();
        let load = Complex64::new(35.0, -20.0);
        let params = [
            ComponentParams::Capacitor { capacitance: 15e-12 },
            ComponentParams::Inductor { inductance: 80e-9 },
            ComponentParams::Resistor { resistance: 120.0 },
        ];
        for p in params {
            let series = Component::from_def(&ComponentDef::new(p, Placement::Series), &ctx).unwrap();
            let shunt = Component::from_def(&ComponentDef::new(p, Placement::Shunt), &ctx).unwrap();

            let z_element = series.transform(Complex64::new(0.0, 0.0)).unwrap();
            assert_relative_eq!(series.transform(load).unwrap().re, (load + z_element).re);
            assert_relative_eq!(series.transform(load).unwrap().im, (load + z_element).im);

            let expected = 1.0 / (1.0 / load + 1.0 / z_element);
            let got = shunt.transform(load).unwrap();
            assert_relative_eq!(got.re, expected.re, max_relative = 1e-12);
            assert_relative_eq!(got.im, expected.im, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_shunt_with_zero_input_is_domain_fault() {
        let r = Component::from_def(
            &ComponentDef::new(ComponentParams::Resistor { resistance: 50.0 }, Placement::Shunt),
            &context(),
        )
        .unwrap();
        let err = r.transform(Complex64::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Domain);
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(ComponentKind::Inductor, "inductance", 1e-9).unwrap(), 1e-9);
        assert!(require_positive(ComponentKind::Inductor, "inductance", -1e-9).is_err());
        assert!(require_positive(ComponentKind::Inductor, "inductance", f64::NAN).is_err());
        assert!(require_positive(ComponentKind::Inductor, "inductance", f64::INFINITY).is_err());
    }
}
