//! Core types for circuit listings.

use std::fmt;

use crate::components::{ComponentKind, Placement};

/// One row of a circuit listing, for diagram rendering and component data.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentListing {
    /// Position in the cascade, 0 at the load
    pub index: usize,
    /// Variant tag
    pub kind: ComponentKind,
    /// Series or shunt
    pub placement: Placement,
    /// 1-based count among components of the same kind
    pub ordinal: usize,
    /// Output of the component's `describe`
    pub summary: String,
}

impl ComponentListing {
    /// Label such as `C1`.
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.tag(), self.ordinal)
    }
}

impl fmt::Display for ComponentListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}

/// Per-kind counters used to assign ordinals while walking a circuit.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KindCounts {
    capacitors: usize,
    inductors: usize,
    resistors: usize,
    lines: usize,
}

impl KindCounts {
    /// Count one more component of `kind` and return its ordinal.
    pub(crate) fn next(&mut self, kind: ComponentKind) -> usize {
        let slot = match kind {
            ComponentKind::Capacitor => &mut self.capacitors,
            ComponentKind::Inductor => &mut self.inductors,
            ComponentKind::Resistor => &mut self.resistors,
            ComponentKind::TransmissionLine => &mut self.lines,
        };
        *slot += 1;
        *slot
    }
}
