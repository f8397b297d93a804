//! Circuit cascade structure.

use super::types::{ComponentListing, KindCounts};
use crate::components::Component;

/// An ordered cascade of components, load end first.
///
/// The circuit only grows by [`Circuit::push`] and empties by
/// [`Circuit::clear`]; an empty circuit is valid and transforms a load into
/// itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    components: Vec<Component>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component at the source end and return it.
    pub fn push(&mut self, component: Component) -> &Component {
        self.components.push(component);
        &self.components[self.components.len() - 1]
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the circuit has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in cascade order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Iterate over components in cascade order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Per-kind 1-based ordinals, aligned with [`Circuit::components`].
    pub fn ordinals(&self) -> Vec<usize> {
        let mut counts = KindCounts::default();
        self.components.iter().map(|c| counts.next(c.kind())).collect()
    }

    /// Label (`C1`, `T2`, ...) of the component at `index`.
    pub fn label(&self, index: usize) -> Option<String> {
        let component = self.components.get(index)?;
        let ordinal = self.components[..index]
            .iter()
            .filter(|c| c.kind() == component.kind())
            .count()
            + 1;
        Some(component.label(ordinal))
    }

    /// Describe every component, in insertion order.
    pub fn listing(&self) -> Vec<ComponentListing> {
        self.components
            .iter()
            .zip(self.ordinals())
            .enumerate()
            .map(|(index, (component, ordinal))| ComponentListing {
                index,
                kind: component.kind(),
                placement: component.placement(),
                ordinal,
                summary: component.describe(ordinal),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Capacitor, ComponentKind, Inductor, Placement, Resistor};
    use crate::solver::SessionContext;

    fn sample() -> Circuit {
        let ctx = SessionContext::new(100e6).unwrap();
        let mut circuit = Circuit::new();
        circuit.push(Component::Capacitor(Capacitor::new(1e-12, Placement::Shunt, &ctx).unwrap()));
        circuit.push(Component::Resistor(Resistor::new(25.0, Placement::Series).unwrap()));
        circuit.push(Component::Capacitor(Capacitor::new(2e-12, Placement::Series, &ctx).unwrap()));
        circuit.push(Component::Inductor(Inductor::new(1e-9, Placement::Series, &ctx).unwrap()));
        circuit
    }

    #[test]
    fn test_ordinals_count_per_kind() {
        let circuit = sample();
        assert_eq!(circuit.ordinals(), vec![1, 1, 2, 1]);
        assert_eq!(circuit.label(2).as_deref(), Some("C2"));
        assert_eq!(circuit.label(3).as_deref(), Some("L1"));
        assert_eq!(circuit.label(4), None);
    }

    #[test]
    fn test_listing_preserves_order() {
        let listing = sample().listing();
        assert_eq!(listing.len(), 4);
        assert_eq!(listing[0].kind, ComponentKind::Capacitor);
        assert_eq!(listing[0].placement, Placement::Shunt);
        assert_eq!(listing[0].label(), "C1");
        assert_eq!(listing[1].label(), "R1");
        assert_eq!(listing[2].label(), "C2");
        assert!(listing[2].summary.starts_with("C2:"));
        assert_eq!(listing[3].index, 3);
    }

    #[test]
    fn test_clear_empties() {
        let mut circuit = sample();
        assert!(!circuit.is_empty());
        circuit.clear();
        assert!(circuit.is_empty());
        assert!(circuit.listing().is_empty());
    }
}
