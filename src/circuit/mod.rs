//! Circuit representation: an ordered cascade of components.
//!
//! Insertion order is the electrical order, starting at the terminating load
//! and moving outward toward the source. Components have no identity beyond
//! their position; per-kind ordinals (`C1`, `C2`, `L1`, ...) are derived on
//! demand for display.

mod cascade;
mod types;
mod validate;

pub use cascade::Circuit;
pub use types::*;
pub use validate::validate_component;
