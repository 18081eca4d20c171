//! Well-Clear Violation Norm Library
//!
//! Closed-form severity metrics for pairwise aircraft encounters. Given the
//! relative position and velocity of an intruder and a set of well-clear
//! thresholds, every norm answers: how close is this geometry to violating
//! the protected volume, as a value nominally in `[0, 1]`?
//!
//! ## Layout
//!
//! - [`core_types`]: the relative-state vector, threshold configuration and errors
//! - [`geometry`]: quadratic roots, closest approach, co-altitude and boundary times
//! - [`norms`]: horizontal/vertical components, combinators and the four top-level variants
//! - [`encounter`]: straight-line encounters, event times and sampled severity traces
//!
//! Everything in [`geometry`] and [`norms`] is a pure function. Degenerate
//! geometry (zero relative velocity, zero range, no boundary crossing) yields a
//! defined sentinel, never NaN or a panic.

// Core types and utilities
pub mod core_types;

// Pure model
pub mod geometry;
pub mod norms;

// Sampling along a relative trajectory
pub mod encounter;

// Re-export core types
pub use core_types::{Result, Vect3, WcvError, WcvThresholds};

// Re-export the model surface
pub use geometry::{delta, tcoa, tcpa, theta_d, timein};
pub use norms::{
    horizontal_wcv_xdist, horizontal_wcv_ydist, sympoly2, sympoly3, vertical_wcv_norm, wcv_norm,
    wcv_norm_alt, wcv_norm_alt_orig, wcv_norm_alt_other, AltNormPolicy, NormVariant,
};

// Re-export sampling types
pub use encounter::{
    Encounter, EncounterEvents, SampledQuantity, SamplingPlan, SeverityTrace,
};
