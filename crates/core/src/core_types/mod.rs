//! Core types and utilities

pub mod error;
pub mod thresholds;
pub mod vect3;

pub use error::{Result, WcvError};
pub use thresholds::WcvThresholds;
pub use vect3::{almost_equals, sq, Vect3, ALMOST_EQUALS_TOLERANCE};
