//! Top-level WCV norm variants
//!
//! The reference metric [`wcv_norm`] blends the horizontal time/distance terms
//! with the vertical norm. The three alternative formulations share one shape
//! (range term, miss-distance term, vertical term, combinator) and are
//! expressed as an [`AltNormPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::combinators::{complement_product, sympoly2, sympoly3};
use super::horizontal::{horizontal_wcv_xdist, horizontal_wcv_ydist};
use super::penetration::{hmd_pen_dist, range_pen_dist, range_pen_dist2};
use super::vertical::{vert_pen_dist, vertical_wcv_norm};
use crate::core_types::{sq, Vect3, WcvError, WcvThresholds};

/// Reference WCV severity.
///
/// Diverging pairs (`s·v >= 0`) combine the horizontal terms in quadrature,
/// converging pairs through [`sympoly2`]. The horizontal result is then
/// blended with the vertical norm through [`sympoly2`].
pub fn wcv_norm(tthr: f64, tcoa: f64, dthr: f64, zthr: f64, s: Vect3, v: Vect3) -> f64 {
    let hnorm_x = horizontal_wcv_xdist(tthr, dthr, s, v);
    let hnorm_y = horizontal_wcv_ydist(tthr, dthr, s, v);
    let vnorm = vertical_wcv_norm(zthr, tcoa, s.z(), v.z());
    let hnorm = if s.dot2(v) >= 0.0 {
        (sq(hnorm_x) + sq(hnorm_y)).sqrt()
    } else {
        sympoly2(hnorm_x, hnorm_y)
    };
    sympoly2(hnorm, vnorm)
}

/// Which range-penetration term an alternative norm uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeTerm {
    /// [`range_pen_dist`]: clamped penetration of the projected safe range.
    ProjectedRange,
    /// [`range_pen_dist2`]: range over the closure-adjusted threshold.
    ClosureAdjusted,
}

impl RangeTerm {
    pub fn evaluate(self, tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
        match self {
            RangeTerm::ProjectedRange => range_pen_dist(tthr, dthr, s, v),
            RangeTerm::ClosureAdjusted => range_pen_dist2(tthr, dthr, s, v),
        }
    }
}

/// How an alternative norm blends its three terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [`sympoly3`]
    SymmetricPolynomial,
    /// [`complement_product`]
    ComplementProduct,
}

impl Combinator {
    pub fn combine(self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Combinator::SymmetricPolynomial => sympoly3(x, y, z),
            Combinator::ComplementProduct => complement_product(x, y, z),
        }
    }
}

/// Blending policy for the alternative norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AltNormPolicy {
    pub range_term: RangeTerm,
    pub combinator: Combinator,
}

impl AltNormPolicy {
    pub const ALT: AltNormPolicy = AltNormPolicy {
        range_term: RangeTerm::ProjectedRange,
        combinator: Combinator::SymmetricPolynomial,
    };

    pub const ALT_ORIG: AltNormPolicy = AltNormPolicy {
        range_term: RangeTerm::ProjectedRange,
        combinator: Combinator::ComplementProduct,
    };

    pub const ALT_OTHER: AltNormPolicy = AltNormPolicy {
        range_term: RangeTerm::ClosureAdjusted,
        combinator: Combinator::SymmetricPolynomial,
    };

    pub fn evaluate(self, tthr: f64, dthr: f64, zthr: f64, s: Vect3, v: Vect3) -> f64 {
        let hnorm_x = self.range_term.evaluate(tthr, dthr, s, v);
        let hnorm_y = hmd_pen_dist(tthr, dthr, s, v);
        let vnorm = vert_pen_dist(zthr, s.z());
        self.combinator.combine(hnorm_x, hnorm_y, vnorm)
    }
}

/// Projected-range penetration, miss distance and vertical ratio through [`sympoly3`].
pub fn wcv_norm_alt(tthr: f64, dthr: f64, zthr: f64, s: Vect3, v: Vect3) -> f64 {
    AltNormPolicy::ALT.evaluate(tthr, dthr, zthr, s, v)
}

/// Same terms as [`wcv_norm_alt`] through the complement product.
pub fn wcv_norm_alt_orig(tthr: f64, dthr: f64, zthr: f64, s: Vect3, v: Vect3) -> f64 {
    AltNormPolicy::ALT_ORIG.evaluate(tthr, dthr, zthr, s, v)
}

/// Closure-adjusted range ratio, miss distance and vertical ratio through [`sympoly3`].
pub fn wcv_norm_alt_other(tthr: f64, dthr: f64, zthr: f64, s: Vect3, v: Vect3) -> f64 {
    AltNormPolicy::ALT_OTHER.evaluate(tthr, dthr, zthr, s, v)
}

/// One of the four comparable severity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormVariant {
    Reference,
    Alt,
    AltOrig,
    AltOther,
}

impl NormVariant {
    pub const ALL: [NormVariant; 4] = [
        NormVariant::Reference,
        NormVariant::Alt,
        NormVariant::AltOrig,
        NormVariant::AltOther,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NormVariant::Reference => "reference",
            NormVariant::Alt => "alt",
            NormVariant::AltOrig => "alt-orig",
            NormVariant::AltOther => "alt-other",
        }
    }

    /// Blending policy, `None` for the reference metric.
    pub fn policy(self) -> Option<AltNormPolicy> {
        match self {
            NormVariant::Reference => None,
            NormVariant::Alt => Some(AltNormPolicy::ALT),
            NormVariant::AltOrig => Some(AltNormPolicy::ALT_ORIG),
            NormVariant::AltOther => Some(AltNormPolicy::ALT_OTHER),
        }
    }

    /// Severity of the relative state `(s, v)`.
    pub fn evaluate(self, thresholds: &WcvThresholds, s: Vect3, v: Vect3) -> f64 {
        let WcvThresholds {
            tthr,
            tcoa,
            dthr,
            zthr,
        } = *thresholds;
        match self.policy() {
            None => wcv_norm(tthr, tcoa, dthr, zthr, s, v),
            Some(policy) => policy.evaluate(tthr, dthr, zthr, s, v),
        }
    }

    /// The horizontal sub-term that characterises this variant:
    /// `horizontal_wcv_ydist` for the reference metric, the range term otherwise.
    pub fn horizontal_term(self, thresholds: &WcvThresholds, s: Vect3, v: Vect3) -> f64 {
        match self.policy() {
            None => horizontal_wcv_ydist(thresholds.tthr, thresholds.dthr, s, v),
            Some(policy) => policy
                .range_term
                .evaluate(thresholds.tthr, thresholds.dthr, s, v),
        }
    }
}

impl fmt::Display for NormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormVariant {
    type Err = WcvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormVariant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WcvError::UnknownVariant {
                name: s.to_string(),
            })
    }
}
