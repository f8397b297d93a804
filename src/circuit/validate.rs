//! Append-time validation.

use crate::components::Component;
use crate::error::{CascadeError, Result};
use crate::solver::SessionContext;

/// Validate a component for appending to a circuit running under `context`.
///
/// Checks:
/// - Frequency-dependent components were built at the session frequency
pub fn validate_component(component: &Component, context: &SessionContext) -> Result<()> {
    if let Some(frequency) = component.frequency() {
        if frequency != context.frequency() {
            return Err(CascadeError::FrequencyMismatch {
                component: frequency,
                session: context.frequency(),
            });
        }
    }
    Ok(())
}
