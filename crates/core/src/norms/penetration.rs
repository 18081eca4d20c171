//! Penetration-ratio terms for the alternative norm formulations
//!
//! These express how deep the current geometry sits inside a (possibly
//! closure-rate-expanded) horizontal range threshold.

use crate::core_types::{almost_equals, sq, Vect3};
use crate::geometry::dcpa;

/// Projected safe range: the positive root of `r² + ṙ·tthr·r - dthr² = 0`
/// where `ṙ` is the current range rate, never less than `dthr`.
///
/// Returns `dthr` when the current range is (almost) zero.
pub fn si(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    let range = s.norm2();
    if almost_equals(range, 0.0) {
        return dthr;
    }
    let rdot = s.dot2(v) / range;
    let sqrt_arg = sq(rdot * tthr) + 4.0 * sq(dthr);
    dthr.max(0.5 * (sqrt_arg.sqrt() - rdot * tthr))
}

/// Range penetration relative to [`si`]: `1` outside the projected range,
/// falling towards `0` at zero range.
pub fn range_pen_dist(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    let safe_range = si(tthr, dthr, s, v);
    if almost_equals(safe_range, 0.0) {
        return 1.0;
    }
    1.0 - ((safe_range - s.norm2()) / safe_range).max(0.0)
}

/// Range over the closure-adjusted threshold `sqrt(dthr² + max(0, -tthr·s·v))`.
///
/// Unlike [`range_pen_dist`] this is not clamped and exceeds `1` outside the
/// threshold.
pub fn range_pen_dist2(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    let sqrt_in = sq(dthr) + (-tthr * s.dot2(v)).max(0.0);
    s.norm2() / sqrt_in.sqrt()
}

/// Horizontal miss distance at closest approach over `dthr`.
pub fn hmd_pen_dist(_tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    dcpa(s, v) / dthr
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_si_zero_range() {
        assert_eq!(si(35.0, 4000.0, Vect3::zero(), Vect3::new(300.0, 0.0, 0.0)), 4000.0);
    }

    #[test]
    fn test_si_grows_with_closure() {
        let v = Vect3::new(337.0, 0.0, 0.0);
        let closing = si(35.0, 4000.0, Vect3::new(-10000.0, 0.0, 0.0), v);
        let opening = si(35.0, 4000.0, Vect3::new(10000.0, 0.0, 0.0), v);
        assert!(closing > 4000.0);
        assert_eq!(opening, 4000.0);
    }

    #[test]
    fn test_si_without_closure_is_dthr() {
        // Pure crossing geometry: rdot = 0
        let s = Vect3::new(0.0, 2000.0, 0.0);
        let v = Vect3::new(337.0, 0.0, 0.0);
        assert_relative_eq!(si(35.0, 4000.0, s, v), 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_range_pen_dist_bounds() {
        let v = Vect3::new(337.0, 0.0, 0.0);
        // Far outside: saturates at 1
        assert_eq!(range_pen_dist(35.0, 4000.0, Vect3::new(-30000.0, 0.0, 0.0), v), 1.0);
        // Halfway inside with no closure
        let half = range_pen_dist(35.0, 4000.0, Vect3::new(0.0, 2000.0, 0.0), v);
        assert_relative_eq!(half, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_range_pen_dist2() {
        let v = Vect3::new(337.0, 0.0, 0.0);
        // Diverging: plain range ratio
        assert_relative_eq!(
            range_pen_dist2(35.0, 4000.0, Vect3::new(8000.0, 0.0, 0.0), v),
            2.0,
            epsilon = 1e-12
        );
        // Converging: threshold expanded by closure
        let s = Vect3::new(-8000.0, 0.0, 0.0);
        let expected = 8000.0 / (4000.0_f64.powi(2) + 35.0 * 8000.0 * 337.0).sqrt();
        assert_relative_eq!(range_pen_dist2(35.0, 4000.0, s, v), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_hmd_pen_dist() {
        let s = Vect3::new(-30000.0, 2000.0, 0.0);
        let v = Vect3::new(337.0, 0.0, 0.0);
        assert_relative_eq!(hmd_pen_dist(35.0, 4000.0, s, v), 0.5, epsilon = 1e-9);
    }
}
