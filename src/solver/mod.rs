//! Cascade evaluation engine.
//!
//! This module folds a load impedance through a [`Circuit`](crate::circuit::Circuit)
//! and derives matching figures from the result.
//!
//! ## Folding
//!
//! Components are applied strictly left to right, load end first:
//!
//! ```text
//! Z0 = Zload
//! Zk = transform_k(Zk-1)      k = 1..n
//! Zout = Zn
//! ```
//!
//! Each step depends on the previous one, so the fold is never reordered.
//! An empty circuit returns the load unchanged.
//!
//! ## Matching
//!
//! Against a reference impedance Zref (50 Ω unless configured otherwise):
//!
//! ```text
//! Γ   = (Zref - Zout) / (Zref + Zout)
//! SWR = (1 + |Γ|) / (1 - |Γ|)
//! ```

mod cascade;
mod context;
mod matching;
mod session;

pub use cascade::fold;
pub use context::SessionContext;
pub use matching::{evaluate, reflection_coefficient, standing_wave_ratio, Evaluation};
pub use session::Session;

/// |Γ| within this distance of 1 is treated as total reflection.
pub const SWR_UNITY_TOLERANCE: f64 = 1e-12;
