//! Single-owner session: context, circuit and load.

use num_complex::Complex64;
use tracing::info;

use super::context::SessionContext;
use super::matching::{evaluate, Evaluation};
use crate::circuit::{validate_component, Circuit, ComponentListing};
use crate::components::{Component, ComponentDef};
use crate::error::{CascadeError, Result};
use crate::DEFAULT_REFERENCE_IMPEDANCE;

/// One interactive session.
///
/// The circuit is the only mutable state and changes only through
/// [`Session::add`]/[`Session::append`] and [`Session::clear`]. A failed
/// append leaves the circuit untouched. The session is not shared between
/// threads; wrap it yourself if you must.
#[derive(Debug, Clone)]
pub struct Session {
    context: SessionContext,
    circuit: Circuit,
    load: Complex64,
}

impl Session {
    /// Create an empty session. The load defaults to the reference impedance
    /// of a fresh context (50 Ω).
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            circuit: Circuit::new(),
            load: DEFAULT_REFERENCE_IMPEDANCE,
        }
    }

    /// Set the load impedance, builder style.
    pub fn with_load(mut self, load: Complex64) -> Self {
        self.set_load(load);
        self
    }

    /// The session context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The terminating load impedance.
    pub fn load(&self) -> Complex64 {
        self.load
    }

    /// Operating frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.context.frequency()
    }

    /// Replace the terminating load impedance.
    pub fn set_load(&mut self, load: Complex64) {
        info!(load = %load, "load impedance set");
        self.load = load;
    }

    /// Change the operating frequency. Only allowed while the circuit is
    /// empty (or when the frequency does not actually change).
    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        let context = self.context.with_frequency(frequency)?;
        if frequency == self.context.frequency() {
            return Ok(());
        }
        if !self.circuit.is_empty() {
            return Err(CascadeError::FrequencyLocked {
                current: self.context.frequency(),
                requested: frequency,
                components: self.circuit.len(),
            });
        }
        info!(frequency, "session frequency set");
        self.context = context;
        Ok(())
    }

    /// Build a component from `def` at the session frequency and append it.
    pub fn add(&mut self, def: &ComponentDef) -> Result<&Component> {
        let component = Component::from_def(def, &self.context)?;
        self.append(component)
    }

    /// Append an already-built component.
    pub fn append(&mut self, component: Component) -> Result<&Component> {
        validate_component(&component, &self.context)?;
        let index = self.circuit.len();
        let component = self.circuit.push(component);
        info!(
            index,
            kind = %component.kind(),
            placement = %component.placement(),
            "component appended"
        );
        Ok(component)
    }

    /// Remove every component. The frequency becomes changeable again.
    pub fn clear(&mut self) {
        info!(removed = self.circuit.len(), "circuit cleared");
        self.circuit.clear();
    }

    /// Describe every component, in insertion order.
    pub fn listing(&self) -> Vec<ComponentListing> {
        self.circuit.listing()
    }

    /// Impedance seen at the source end.
    pub fn output_impedance(&self) -> Result<Complex64> {
        super::fold(self.load, &self.circuit)
    }

    /// Output impedance, Γ and SWR against the reference impedance.
    pub fn evaluate(&self) -> Result<Evaluation> {
        evaluate(self.load, &self.circuit, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::components::{ComponentKind, ComponentParams, Placement};
    use crate::error::FaultKind;

    fn session() -> Session {
        Session::new(SessionContext::new(100e6).unwrap())
    }

    fn resistor(resistance: f64, placement: Placement) -> ComponentDef {
        ComponentDef::new(ComponentParams::Resistor { resistance }, placement)
    }

    #[test]
    fn test_end_to_end_series_resistor() {
        let mut s = session().with_load(Complex64::new(50.0, 0.0));
        s.add(&resistor(25.0, Placement::Series)).unwrap();
        let eval = s.evaluate().unwrap();
        assert_eq!(eval.output_impedance, Complex64::new(75.0, 0.0));
        assert_relative_eq!(eval.reflection_coefficient.re, -0.2, epsilon = 1e-15);
        assert_eq!(eval.swr_text(), "1.5:1");
    }

    #[test]
    fn test_failed_add_leaves_circuit_untouched() {
        let mut s = session();
        s.add(&resistor(10.0, Placement::Series)).unwrap();

        let bad = [
            ComponentDef::new(ComponentParams::Capacitor { capacitance: 0.0 }, Placement::Series),
            resistor(-5.0, Placement::Shunt),
            ComponentDef::new(
                ComponentParams::TransmissionLine {
                    length: 1.0,
                    characteristic_impedance: Complex64::new(50.0, 0.0),
                    velocity_factor: 1.0,
                },
                Placement::Shunt,
            ),
        ];
        for def in &bad {
            assert!(s.add(def).is_err());
            assert_eq!(s.circuit().len(), 1);
        }
    }

    #[test]
    fn test_frequency_locked_while_components_exist() {
        let mut s = session();
        s.set_frequency(200e6).unwrap();
        assert_eq!(s.frequency(), 200e6);

        s.add(&ComponentDef::new(ComponentParams::Inductor { inductance: 1e-9 }, Placement::Series))
            .unwrap();
        let err = s.set_frequency(300e6).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Validation);
        assert!(matches!(err, CascadeError::FrequencyLocked { components: 1, .. }));
        assert!(s.set_frequency(200e6).is_ok());

        s.clear();
        s.set_frequency(300e6).unwrap();
        assert_eq!(s.frequency(), 300e6);
    }

    #[test]
    fn test_append_rejects_foreign_frequency() {
        let other = SessionContext::new(1e6).unwrap();
        let component = Component::from_def(
            &ComponentDef::new(ComponentParams::Capacitor { capacitance: 1e-9 }, Placement::Shunt),
            &other,
        )
        .unwrap();
        let mut s = session();
        assert!(matches!(
            s.append(component),
            Err(CascadeError::FrequencyMismatch { .. })
        ));
        assert!(s.circuit().is_empty());
    }

    #[test]
    fn test_domain_fault_is_recoverable() {
        let mut s = session().with_load(Complex64::new(0.0, 0.0));
        s.add(&resistor(50.0, Placement::Shunt)).unwrap();
        let err = s.evaluate().unwrap_err();
        assert_eq!(err.kind(), FaultKind::Domain);

        s.set_load(Complex64::new(50.0, 0.0));
        assert_relative_eq!(s.output_impedance().unwrap().re, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_listing_reports_kind_and_placement() {
        let mut s = session();
        s.add(&resistor(10.0, Placement::Shunt)).unwrap();
        s.add(&ComponentDef::new(ComponentParams::Capacitor { capacitance: 1e-12 }, Placement::Series))
            .unwrap();
        let listing = s.listing();
        assert_eq!(listing[0].kind, ComponentKind::Resistor);
        assert_eq!(listing[0].placement, Placement::Shunt);
        assert_eq!(listing[1].label(), "C1");
    }
}
