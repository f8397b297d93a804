//! Error types for the RF cascade engine.
//!
//! This module provides a unified error type [`CascadeError`] that covers
//! every fault the engine can raise while parsing input, constructing
//! components and folding a load impedance through a circuit.
//!
//! Faults fall into three families (see [`FaultKind`]):
//! - **Validation**: bad parameters or malformed text, raised at
//!   construction/parse time. Callers re-prompt.
//! - **Domain**: divide-by-zero conditions from physically degenerate inputs,
//!   raised while evaluating. Callers retry with different input.
//! - **Unsupported**: configurations the model does not cover.

use thiserror::Error;

use crate::components::{ComponentKind, Placement};

/// Result type alias using [`CascadeError`].
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Coarse classification of a [`CascadeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Invalid parameter or malformed input text
    Validation,
    /// Arithmetic singularity while evaluating
    Domain,
    /// Configuration outside the model
    Unsupported,
    /// Terminal I/O failure in the interactive shell
    Io,
}

/// Unified error type for all cascade operations.
#[derive(Error, Debug)]
pub enum CascadeError {
    // ============ Validation Faults ============
    /// Component parameter outside its physical range
    #[error("Invalid {param} for {component}: {value} ({message})")]
    InvalidParameter {
        component: ComponentKind,
        param: &'static str,
        value: f64,
        message: String,
    },

    /// Operating frequency is not a positive finite number
    #[error("Invalid frequency {value} Hz: must be positive and finite")]
    InvalidFrequency { value: f64 },

    /// Frequency change requested while components exist
    #[error("Frequency is locked at {current} Hz while the circuit holds {components} component(s); cannot change to {requested} Hz")]
    FrequencyLocked {
        current: f64,
        requested: f64,
        components: usize,
    },

    /// Component was built for a different session frequency
    #[error("Component was built for {component} Hz but the session runs at {session} Hz")]
    FrequencyMismatch { component: f64, session: f64 },

    /// Malformed complex impedance text
    #[error("Cannot parse impedance '{input}' at column {column}: {message}")]
    ImpedanceSyntax {
        input: String,
        column: usize,
        message: String,
    },

    /// Malformed real quantity text
    #[error("Cannot parse number '{input}': {message}")]
    QuantitySyntax { input: String, message: String },

    /// Placement text matched neither series nor shunt
    #[error("Invalid placement '{input}': enter \"series\" or \"shunt\"")]
    PlacementSyntax { input: String },

    /// Reference impedance unusable for matching calculations
    #[error("Invalid reference impedance {re}{im:+}j: must be non-zero and finite")]
    InvalidReference { re: f64, im: f64 },

    // ============ Domain Faults ============
    /// Division by a zero (or non-finite result) during evaluation
    #[error("Divide by zero: {operation}")]
    DivideByZero { operation: String },

    /// Standing-wave ratio is unbounded
    #[error("SWR is unbounded: |Γ| = {magnitude:.6} (total reflection)")]
    UnboundedSwr { magnitude: f64 },

    /// A fault raised by one step of the cascade fold
    #[error("Stage {index} ({label}): {source}")]
    Stage {
        index: usize,
        label: String,
        #[source]
        source: Box<CascadeError>,
    },

    // ============ Unsupported Configurations ============
    /// Placement not modelled for this component kind
    #[error("{component} does not support {placement} placement")]
    UnsupportedConfiguration {
        component: ComponentKind,
        placement: Placement,
    },

    // ============ I/O Errors ============
    /// Terminal read/write failure in the interactive shell
    #[error("Terminal I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CascadeError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        component: ComponentKind,
        param: &'static str,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            component,
            param,
            value,
            message: message.into(),
        }
    }

    /// Create an impedance syntax error
    pub fn impedance_syntax(input: impl Into<String>, column: usize, message: impl Into<String>) -> Self {
        Self::ImpedanceSyntax {
            input: input.into(),
            column,
            message: message.into(),
        }
    }

    /// Create a divide-by-zero error
    pub fn divide_by_zero(operation: impl Into<String>) -> Self {
        Self::DivideByZero {
            operation: operation.into(),
        }
    }

    /// Wrap a fault with the cascade stage that raised it
    pub fn at_stage(self, index: usize, label: impl Into<String>) -> Self {
        Self::Stage {
            index,
            label: label.into(),
            source: Box::new(self),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::InvalidParameter { .. }
            | Self::InvalidFrequency { .. }
            | Self::FrequencyLocked { .. }
            | Self::FrequencyMismatch { .. }
            | Self::ImpedanceSyntax { .. }
            | Self::QuantitySyntax { .. }
            | Self::PlacementSyntax { .. }
            | Self::InvalidReference { .. } => FaultKind::Validation,
            Self::DivideByZero { .. } | Self::UnboundedSwr { .. } => FaultKind::Domain,
            Self::Stage { source, .. } => source.kind(),
            Self::UnsupportedConfiguration { .. } => FaultKind::Unsupported,
            Self::Io { .. } => FaultKind::Io,
        }
    }

    /// Check if the caller can recover by supplying different input.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != FaultKind::Io
    }
}
