//! Encounter sampling
//!
//! Evaluates the norms along a straight-line relative trajectory: event times,
//! uniformly sampled traces and the marker values at the event times. Rendering
//! the traces is left to the caller.

pub mod events;
pub mod sampling;

pub use events::{Encounter, EncounterEvents};
pub use sampling::{
    marker_values, min_index, sample, sample_all, MarkerValue, SampledQuantity, SamplingPlan,
    SeverityTrace,
};
