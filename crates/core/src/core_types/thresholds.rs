//! Well-clear threshold configuration.
//!
//! Thresholds are caller-owned constants. The free functions in
//! [`crate::geometry`] and [`crate::norms`] take them as plain `f64`s; this
//! struct bundles and validates them for the encounter layer, the CLI and the
//! FFI.

use serde::{Deserialize, Serialize};

use super::error::{Result, WcvError};

/// Threshold set consumed by every norm computation.
///
/// Distances share whatever unit the relative states use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WcvThresholds {
    /// Time threshold (s) used to project risk ahead of now.
    pub tthr: f64,
    /// Time-to-co-altitude threshold (s). Zero disables the time term of the vertical norm.
    pub tcoa: f64,
    /// Horizontal distance threshold (DTHR / DMOD).
    pub dthr: f64,
    /// Vertical distance threshold.
    pub zthr: f64,
}

impl WcvThresholds {
    /// Reference encounter time threshold (s)
    pub const REFERENCE_TTHR: f64 = 35.0;
    /// Reference encounter time-to-co-altitude threshold (s)
    pub const REFERENCE_TCOA: f64 = 0.0;
    /// Reference encounter horizontal threshold
    pub const REFERENCE_DTHR: f64 = 4000.0;
    /// Reference encounter vertical threshold
    pub const REFERENCE_ZTHR: f64 = 450.0;

    /// Create a validated threshold set.
    ///
    /// # Errors
    /// Returns [`WcvError::InvalidThreshold`] if DTHR or ZTHR is not finite and
    /// positive, or if TTHR or TCOA is not finite and non-negative.
    pub fn new(tthr: f64, tcoa: f64, dthr: f64, zthr: f64) -> Result<Self> {
        let thresholds = Self {
            tthr,
            tcoa,
            dthr,
            zthr,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check every threshold against its domain.
    ///
    /// # Errors
    /// See [`WcvThresholds::new`].
    pub fn validate(&self) -> Result<()> {
        non_negative("TTHR", self.tthr)?;
        non_negative("TCOA", self.tcoa)?;
        positive("DTHR", self.dthr)?;
        positive("ZTHR", self.zthr)?;
        Ok(())
    }
}

impl Default for WcvThresholds {
    fn default() -> Self {
        Self {
            tthr: Self::REFERENCE_TTHR,
            tcoa: Self::REFERENCE_TCOA,
            dthr: Self::REFERENCE_DTHR,
            zthr: Self::REFERENCE_ZTHR,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WcvError::threshold(
            name,
            value,
            "must be finite and positive",
        ))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WcvError::threshold(
            name,
            value,
            "must be finite and non-negative",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_encounter() {
        let t = WcvThresholds::default();
        assert_eq!(t.tthr, 35.0);
        assert_eq!(t.tcoa, 0.0);
        assert_eq!(t.dthr, 4000.0);
        assert_eq!(t.zthr, 450.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_distances() {
        assert!(matches!(
            WcvThresholds::new(35.0, 0.0, 0.0, 450.0),
            Err(WcvError::InvalidThreshold { name: "DTHR", .. })
        ));
        assert!(matches!(
            WcvThresholds::new(35.0, 0.0, 4000.0, f64::NAN),
            Err(WcvError::InvalidThreshold { name: "ZTHR", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_times() {
        assert!(matches!(
            WcvThresholds::new(-1.0, 0.0, 4000.0, 450.0),
            Err(WcvError::InvalidThreshold { name: "TTHR", .. })
        ));
        assert!(matches!(
            WcvThresholds::new(35.0, f64::INFINITY, 4000.0, 450.0),
            Err(WcvError::InvalidThreshold { name: "TCOA", .. })
        ));
    }

    #[test]
    fn test_zero_time_thresholds_are_valid() {
        assert!(WcvThresholds::new(0.0, 0.0, 1.0, 1.0).is_ok());
    }
}
