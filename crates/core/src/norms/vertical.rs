//! Vertical norm

use crate::core_types::almost_equals;
use crate::geometry::tcoa;

/// Vertical severity term.
///
/// With `tcoa_thr ≈ 0` this is the normalized vertical separation `|sz| / zthr`.
/// Otherwise it is the smaller of that and the worse of the projected
/// separation at co-altitude time and the normalized time to co-altitude.
pub fn vertical_wcv_norm(zthr: f64, tcoa_thr: f64, sz: f64, vz: f64) -> f64 {
    let current = sz.abs() / zthr;
    if almost_equals(tcoa_thr, 0.0) {
        return current;
    }
    let t = tcoa(sz, vz);
    let projected = (sz + t.max(0.0) * vz).abs() / zthr;
    current.min(projected.max(t / tcoa_thr))
}

/// Normalized vertical separation, `|sz| / zthr`.
pub fn vert_pen_dist(zthr: f64, sz: f64) -> f64 {
    sz.abs() / zthr
}
