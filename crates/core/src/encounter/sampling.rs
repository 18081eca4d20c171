//! Sampling severity along an encounter
//!
//! Every sample is an independent pure evaluation, so traces are computed with
//! rayon. `par_iter().map().collect()` keeps the output in time order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::events::{Encounter, EncounterEvents};
use crate::core_types::{Result, WcvError, WcvThresholds};
use crate::norms::NormVariant;

/// Extra samples past `steps` in [`SamplingPlan::around_events`].
const WINDOW_EXTRA_SAMPLES: usize = 5;
/// Seconds of margin before entry and after exit in [`SamplingPlan::around_events`].
const WINDOW_MARGIN: f64 = 2.0;

/// Uniform sampling times `start + i·step` for `i in 0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingPlan {
    pub start: f64,
    pub step: f64,
    pub count: usize,
    /// Log the encounter event summary once when the plan is sampled.
    pub log_events: bool,
}

impl SamplingPlan {
    /// # Errors
    /// Returns [`WcvError::InvalidSampling`] if `count` is zero, `start` is not
    /// finite, or `step` is not finite and positive.
    pub fn new(start: f64, step: f64, count: usize) -> Result<Self> {
        let plan = Self {
            start,
            step,
            count,
            log_events: false,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Window from two seconds before `time_in` to two seconds past the later
    /// of `theta_out` and `tcpa`, split into `steps` intervals plus five
    /// trailing samples.
    ///
    /// A pass that misses the DTHR circle has `theta_out = 0` while `time_in`
    /// can still be positive, so the window ends at closest approach instead.
    ///
    /// # Errors
    /// Returns [`WcvError::InvalidSampling`] if `steps` is zero.
    pub fn around_events(events: &EncounterEvents, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(WcvError::InvalidSampling {
                reason: "steps must be positive".to_string(),
            });
        }
        let end = events.theta_out.max(events.tcpa);
        let window = end - events.time_in + 2.0 * WINDOW_MARGIN;
        Self::new(
            events.time_in - WINDOW_MARGIN,
            window / steps as f64,
            steps + WINDOW_EXTRA_SAMPLES,
        )
    }

    pub fn with_event_logging(mut self, log_events: bool) -> Self {
        self.log_events = log_events;
        self
    }

    /// # Errors
    /// See [`SamplingPlan::new`].
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(WcvError::InvalidSampling {
                reason: "count must be positive".to_string(),
            });
        }
        if !self.start.is_finite() {
            return Err(WcvError::InvalidSampling {
                reason: format!("start must be finite, got {}", self.start),
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(WcvError::InvalidSampling {
                reason: format!("step must be finite and positive, got {}", self.step),
            });
        }
        Ok(())
    }

    pub fn time(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    pub fn times(&self) -> Vec<f64> {
        (0..self.count).map(|i| self.time(i)).collect()
    }
}

/// What a trace records at each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampledQuantity {
    /// The variant's full severity.
    #[default]
    Severity,
    /// The variant's characteristic horizontal sub-term.
    HorizontalTerm,
}

/// Sampled values of one variant along an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityTrace {
    pub variant: NormVariant,
    pub quantity: SampledQuantity,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl SeverityTrace {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(time, value)` pairs in time order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Index of the first minimum value.
    pub fn min_index(&self) -> Option<usize> {
        min_index(&self.values)
    }
}

/// Severity of one variant at a marker time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerValue {
    pub variant: NormVariant,
    pub label: &'static str,
    pub time: f64,
    pub value: f64,
}

/// Index of the first minimum of `values`, `None` when empty.
///
/// Comparison is a plain `<`, so a NaN never replaces the running minimum.
pub fn min_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if value < values[b] => best = Some(i),
            Some(_) => {}
        }
    }
    best
}

/// Sample `variant` along `encounter` at the times of `plan`.
///
/// # Errors
/// Returns an error if the thresholds or the plan fail validation.
pub fn sample(
    encounter: &Encounter,
    thresholds: &WcvThresholds,
    variant: NormVariant,
    quantity: SampledQuantity,
    plan: &SamplingPlan,
) -> Result<SeverityTrace> {
    thresholds.validate()?;
    plan.validate()?;

    if plan.log_events {
        let events = encounter.events(thresholds);
        tracing::info!(
            time_in = events.time_in,
            tcpa = events.tcpa,
            tcoa = events.tcoa,
            theta_in = events.theta_in,
            theta_out = events.theta_out,
            "encounter events"
        );
    }

    let times = plan.times();
    let values: Vec<f64> = times
        .par_iter()
        .map(|&t| match quantity {
            SampledQuantity::Severity => encounter.severity_at(variant, thresholds, t),
            SampledQuantity::HorizontalTerm => encounter.horizontal_term_at(variant, thresholds, t),
        })
        .collect();

    tracing::trace!(
        variant = variant.name(),
        samples = values.len(),
        "sampled severity trace"
    );

    Ok(SeverityTrace {
        variant,
        quantity,
        times,
        values,
    })
}

/// Sample every variant in `variants` with the same plan.
///
/// Event logging, if requested, happens once for the whole batch.
///
/// # Errors
/// See [`sample`].
pub fn sample_all(
    encounter: &Encounter,
    thresholds: &WcvThresholds,
    variants: &[NormVariant],
    quantity: SampledQuantity,
    plan: &SamplingPlan,
) -> Result<Vec<SeverityTrace>> {
    variants
        .iter()
        .enumerate()
        .map(|(i, &variant)| {
            let plan = plan.with_event_logging(plan.log_events && i == 0);
            sample(encounter, thresholds, variant, quantity, &plan)
        })
        .collect()
}

/// Value of `variant` at each marker time of `events`.
pub fn marker_values(
    encounter: &Encounter,
    thresholds: &WcvThresholds,
    variant: NormVariant,
    quantity: SampledQuantity,
    events: &EncounterEvents,
) -> Vec<MarkerValue> {
    events
        .marker_times()
        .into_iter()
        .map(|(label, time)| MarkerValue {
            variant,
            label,
            time,
            value: match quantity {
                SampledQuantity::Severity => encounter.severity_at(variant, thresholds, time),
                SampledQuantity::HorizontalTerm => {
                    encounter.horizontal_term_at(variant, thresholds, time)
                }
            },
        })
        .collect()
}
