//! Straight-line encounters and their event times

use serde::{Deserialize, Serialize};

use crate::core_types::{Vect3, WcvThresholds};
use crate::geometry::{tcoa, tcpa, theta_d, timein};
use crate::norms::NormVariant;

/// Relative trajectory with constant relative velocity: `s(t) = position + velocity·t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub position: Vect3,
    pub velocity: Vect3,
}

impl Encounter {
    pub fn new(position: Vect3, velocity: Vect3) -> Self {
        Self { position, velocity }
    }

    /// Head-on pass at 337 units/s with a 2000 lateral offset, 30000 out.
    pub fn reference() -> Self {
        Self::new(
            Vect3::new(-30000.0, 2000.0, 0.0),
            Vect3::new(337.0, 0.0, 0.0),
        )
    }

    /// Relative state after `t` seconds.
    pub fn state_at(&self, t: f64) -> (Vect3, Vect3) {
        (self.position.add_scal(t, self.velocity), self.velocity)
    }

    pub fn events(&self, thresholds: &WcvThresholds) -> EncounterEvents {
        EncounterEvents::compute(thresholds, self.position, self.velocity)
    }

    /// Severity of `variant` at time `t`.
    pub fn severity_at(&self, variant: NormVariant, thresholds: &WcvThresholds, t: f64) -> f64 {
        let (s, v) = self.state_at(t);
        variant.evaluate(thresholds, s, v)
    }

    /// Horizontal sub-term of `variant` at time `t`.
    pub fn horizontal_term_at(
        &self,
        variant: NormVariant,
        thresholds: &WcvThresholds,
        t: f64,
    ) -> f64 {
        let (s, v) = self.state_at(t);
        variant.horizontal_term(thresholds, s, v)
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::reference()
    }
}

/// Event times of an encounter, measured from its initial state.
///
/// Sentinels follow the underlying functions: `time_in`, `theta_in` and
/// `theta_out` are `0` when no crossing exists, `tcoa` is `-1` when the pair
/// never reaches co-altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncounterEvents {
    /// Entry into the time-weighted protected volume.
    pub time_in: f64,
    /// Horizontal closest point of approach.
    pub tcpa: f64,
    /// Co-altitude.
    pub tcoa: f64,
    /// Entry into the DTHR circle.
    pub theta_in: f64,
    /// Exit from the DTHR circle.
    pub theta_out: f64,
}

impl EncounterEvents {
    pub fn compute(thresholds: &WcvThresholds, s: Vect3, v: Vect3) -> Self {
        let events = Self {
            time_in: timein(thresholds.tthr, thresholds.dthr, s, v),
            tcpa: tcpa(s, v),
            tcoa: tcoa(s.z(), v.z()),
            theta_in: theta_d(thresholds.dthr, s, v, -1.0),
            theta_out: theta_d(thresholds.dthr, s, v, 1.0),
        };
        tracing::debug!(
            time_in = events.time_in,
            tcpa = events.tcpa,
            tcoa = events.tcoa,
            theta_in = events.theta_in,
            theta_out = events.theta_out,
            "computed encounter events"
        );
        events
    }

    /// Times used as overlay markers on severity traces, in plotting order.
    pub fn marker_times(&self) -> [(&'static str, f64); 3] {
        [
            ("theta_in", self.theta_in),
            ("theta_out", self.theta_out),
            ("tcpa", self.tcpa),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_state_at_moves_position_only() {
        let encounter = Encounter::reference();
        let (s, v) = encounter.state_at(10.0);
        assert_eq!(s, Vect3::new(-30000.0 + 3370.0, 2000.0, 0.0));
        assert_eq!(v, encounter.velocity);
    }

    #[test]
    fn test_reference_events_ordering() {
        let events = Encounter::reference().events(&WcvThresholds::default());
        assert!(events.time_in < events.theta_in);
        assert!(events.theta_in < events.tcpa);
        assert!(events.tcpa < events.theta_out);
        assert_eq!(events.tcoa, -1.0);
        assert_relative_eq!(events.tcpa, 30000.0 / 337.0, epsilon = 1e-9);
    }

    #[test]
    fn test_marker_times_order() {
        let events = Encounter::reference().events(&WcvThresholds::default());
        let labels: Vec<_> = events.marker_times().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["theta_in", "theta_out", "tcpa"]);
    }
}
