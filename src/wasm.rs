//! WASM bindings for RF Cascade Core.
//!
//! This module provides JavaScript-friendly bindings for building a cascade
//! and evaluating it from a web page.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSession } from 'rfcascade_core';
//!
//! await init();
//!
//! const session = new WasmSession(100e6, "50+0j");
//! session.add_resistor(25, false);
//! session.add_capacitor(10e-12, true);
//!
//! console.log(session.describe().join("\n"));
//! console.log(session.evaluate());
//! ```

use wasm_bindgen::prelude::*;

use crate::components::{ComponentDef, ComponentParams, Placement};
use crate::error::CascadeError;
use crate::notation::parse_impedance;
use crate::solver::{Session, SessionContext};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CascadeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn placement(shunt: bool) -> Placement {
    if shunt {
        Placement::Shunt
    } else {
        Placement::Series
    }
}

/// WASM-compatible cascade session.
///
/// Wraps the native [`Session`]; every fallible call throws the error text.
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session at `frequency_hz` terminated by `load` (e.g. `"50+0j"`).
    ///
    /// # Example
    /// ```javascript
    /// const session = new WasmSession(100e6, "30-40j");
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(frequency_hz: f64, load: &str) -> Result<WasmSession, JsValue> {
        let context = SessionContext::new(frequency_hz).map_err(to_js)?;
        let load = parse_impedance(load).map_err(to_js)?;
        Ok(WasmSession {
            session: Session::new(context).with_load(load),
        })
    }

    /// Append a capacitor (farads).
    #[wasm_bindgen]
    pub fn add_capacitor(&mut self, capacitance: f64, shunt: bool) -> Result<(), JsValue> {
        self.add(ComponentParams::Capacitor { capacitance }, placement(shunt))
    }

    /// Append an inductor (henries).
    #[wasm_bindgen]
    pub fn add_inductor(&mut self, inductance: f64, shunt: bool) -> Result<(), JsValue> {
        self.add(ComponentParams::Inductor { inductance }, placement(shunt))
    }

    /// Append a resistor (ohms).
    #[wasm_bindgen]
    pub fn add_resistor(&mut self, resistance: f64, shunt: bool) -> Result<(), JsValue> {
        self.add(ComponentParams::Resistor { resistance }, placement(shunt))
    }

    /// Append a series transmission line.
    ///
    /// # Arguments
    /// * `length` - Physical length in meters
    /// * `z0` - Characteristic impedance text, e.g. `"50+0j"`
    /// * `velocity_factor` - Propagation speed as a fraction of c, in (0, 1]
    #[wasm_bindgen]
    pub fn add_transmission_line(&mut self, length: f64, z0: &str, velocity_factor: f64) -> Result<(), JsValue> {
        let characteristic_impedance = parse_impedance(z0).map_err(to_js)?;
        self.add(
            ComponentParams::TransmissionLine {
                length,
                characteristic_impedance,
                velocity_factor,
            },
            Placement::Series,
        )
    }

    /// Remove every component.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Number of components in the cascade.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.session.circuit().len()
    }

    /// One summary line per component, in insertion order.
    #[wasm_bindgen]
    pub fn describe(&self) -> Vec<String> {
        self.session.listing().into_iter().map(|entry| entry.summary).collect()
    }

    /// Impedance, reflection coefficient and SWR as display text.
    #[wasm_bindgen]
    pub fn evaluate(&self) -> Result<String, JsValue> {
        self.session
            .evaluate()
            .map(|evaluation| evaluation.to_string())
            .map_err(to_js)
    }
}

impl WasmSession {
    fn add(&mut self, params: ComponentParams, placement: Placement) -> Result<(), JsValue> {
        self.session
            .add(&ComponentDef::new(params, placement))
            .map(|_| ())
            .map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
