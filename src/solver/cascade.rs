//! Left fold of a load impedance through a circuit.

use num_complex::Complex64;
use tracing::debug;

use crate::circuit::Circuit;
use crate::error::Result;

/// Impedance seen from the source side of `circuit` terminated in `z_load`.
///
/// A fault in any component is wrapped with its position and label
/// (see [`CascadeError::Stage`](crate::error::CascadeError::Stage)).
pub fn fold(z_load: Complex64, circuit: &Circuit) -> Result<Complex64> {
    let mut z = z_load;
    for (index, (component, ordinal)) in circuit.iter().zip(circuit.ordinals()).enumerate() {
        let z_next = component
            .transform(z)
            .map_err(|e| e.at_stage(index, component.label(ordinal)))?;
        debug!(
            stage = index,
            label = %component.label(ordinal),
            placement = %component.placement(),
            z_in = %z,
            z_out = %z_next,
            "applied component"
        );
        z = z_next;
    }
    Ok(z)
}
