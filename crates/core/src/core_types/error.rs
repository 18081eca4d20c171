//! Error type for the few input faults the model checks itself.
//!
//! The norm functions never fail: degenerate geometry is answered with a
//! sentinel value. Errors only come from component lookup, threshold
//! configuration and sampling plans.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WcvError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WcvError {
    /// Component index outside {0, 1, 2}.
    #[error("invalid vector component index {index} (expected 0, 1 or 2)")]
    InvalidComponent { index: usize },

    /// A threshold failed validation.
    #[error("invalid threshold {name}: {value} ({constraint})")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Norm variant name that does not match any known variant.
    #[error("unknown norm variant '{name}' (expected reference, alt, alt-orig or alt-other)")]
    UnknownVariant { name: String },

    /// A sampling plan that cannot produce a trace.
    #[error("invalid sampling plan: {reason}")]
    InvalidSampling { reason: String },
}

impl WcvError {
    pub(crate) fn threshold(name: &'static str, value: f64, constraint: &'static str) -> Self {
        WcvError::InvalidThreshold {
            name,
            value,
            constraint,
        }
    }
}
