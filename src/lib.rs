//! # RF Cascade Core
//!
//! An impedance transform engine for cascaded RF/microwave networks.
//!
//! This library provides:
//! - Lumped components (R, C, L) in series or shunt placement
//! - Lossless series transmission-line segments
//! - A left fold that carries a load impedance through the cascade
//! - Reflection coefficient and SWR against a reference impedance
//! - An interactive shell for building circuits at a terminal (CLI only)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`notation`] - Parsing and formatting of impedance text (`50+0j`)
//! - [`components`] - Component models and their impedance transforms
//! - [`circuit`] - The ordered component cascade and its listing
//! - [`solver`] - Session context, fold, Γ and SWR
//! - [`shell`] - Interactive menu and circuit diagram (CLI only)
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use rfcascade_core::components::{ComponentDef, ComponentParams, Placement};
//! use rfcascade_core::solver::{Session, SessionContext};
//! use rfcascade_core::Complex64;
//!
//! let context = SessionContext::new(100e6)?;
//! let mut session = Session::new(context).with_load(Complex64::new(50.0, 0.0));
//! session.add(&ComponentDef::new(
//!     ComponentParams::Resistor { resistance: 25.0 },
//!     Placement::Series,
//! ))?;
//!
//! let eval = session.evaluate()?;
//! assert_eq!(eval.impedance_text(), "75.00+0.00j");
//! assert_eq!(eval.swr_text(), "1.5:1");
//! # Ok::<(), rfcascade_core::CascadeError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! rfcascade --load "30-40j" --frequency 100e6
//! ```
//!
//! ## Transform Method
//!
//! Series elements add impedance, shunt elements add admittance:
//!
//! 1. Series: Zout = Zin + Ze
//! 2. Shunt: Zout = 1 / (1/Zin + 1/Ze)
//! 3. Line: Zout = Z0 (Zin + jZ0 tan kl) / (Z0 + jZin tan kl)
//!
//! Every inversion is checked; a zero denominator is reported as a domain
//! fault instead of producing infinities.

pub mod circuit;
pub mod components;
pub mod error;
pub mod math;
pub mod notation;
pub mod solver;

#[cfg(feature = "cli")]
pub mod shell;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use components::{Component, ComponentKind, Placement};
pub use error::{CascadeError, FaultKind, Result};
pub use num_complex::Complex64;
pub use solver::{Evaluation, Session, SessionContext};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSession;

/// Speed of light in vacuum in m/s (exact by SI definition)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Default reference impedance for Γ and SWR (50 Ω)
pub const DEFAULT_REFERENCE_IMPEDANCE: Complex64 = Complex64::new(50.0, 0.0);
