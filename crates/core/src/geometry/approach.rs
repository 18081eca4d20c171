//! Closest approach, co-altitude and protected-volume boundary times
//!
//! All times are measured from now along the straight-line relative trajectory
//! `s(t) = s + v·t`. Degenerate geometry returns a defined sentinel instead of
//! dividing by a near-zero value:
//!
//! | function   | degenerate case                   | returns |
//! |------------|-----------------------------------|---------|
//! | `tcpa`     | horizontal `‖v‖ ≈ 0`              | `0`     |
//! | `tcoa`     | not converging vertically         | `-1`    |
//! | `timein`   | negative discriminant, `‖v‖ ≈ 0`  | `0`     |
//! | `theta_d`  | `delta < 0`, `‖v‖ ≈ 0`            | `0`     |

use super::quadratic::{discr, root, root2b};
use crate::core_types::{almost_equals, sq, Vect3};

/// Sentinel returned by [`tcoa`] when vertical separation never reaches zero.
pub const TCOA_NEVER: f64 = -1.0;

/// Time of horizontal closest point of approach.
///
/// Returns `0` when the horizontal relative velocity is (almost) zero.
pub fn tcpa(s: Vect3, v: Vect3) -> f64 {
    if almost_equals(v.norm2(), 0.0) {
        return 0.0;
    }
    -s.dot2(v) / v.sq_norm2()
}

/// Horizontal distance at closest point of approach, `‖s + v·tcpa‖`.
pub fn dcpa(s: Vect3, v: Vect3) -> f64 {
    s.add_scal(tcpa(s, v), v).norm2()
}

/// Time to co-altitude.
///
/// `-sz/vz` when the aircraft are converging vertically (`sz·vz < 0`),
/// [`TCOA_NEVER`] otherwise.
pub fn tcoa(sz: f64, vz: f64) -> f64 {
    if sz * vz < 0.0 {
        -(sz / vz)
    } else {
        TCOA_NEVER
    }
}

/// Geometric discriminant: non-negative iff the trajectory's closest approach
/// is within `d` of the origin.
pub fn delta(d: f64, s: Vect3, v: Vect3) -> f64 {
    sq(d) * v.sq_norm2() - sq(s.det2(v))
}

/// Time at which the horizontal range equals `d`.
///
/// `eps = -1` gives the entry time, `eps = +1` the exit time. Returns `0` when
/// the trajectory never comes within `d` of the origin, or when there is no
/// horizontal relative motion.
pub fn theta_d(d: f64, s: Vect3, v: Vect3, eps: f64) -> f64 {
    let a = v.sq_norm2();
    if almost_equals(a, 0.0) {
        return 0.0;
    }
    let b = s.dot2(v);
    let c = s.sq_norm2() - sq(d);
    if delta(d, s, v) >= 0.0 {
        root2b(a, b, c, eps)
    } else {
        0.0
    }
}

/// Coefficients of the time-weighted boundary quadratic
/// `‖s + v·t‖² + tthr·(s + v·t)·v - dthr² = 0`.
pub(crate) fn timein_coefficients(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> (f64, f64, f64) {
    let a = v.sq_norm2();
    let b = 2.0 * s.dot2(v) + tthr * v.sq_norm2();
    let c = s.sq_norm2() + tthr * s.dot2(v) - sq(dthr);
    (a, b, c)
}

/// Entry time into the time-weighted protected volume.
///
/// Solves the quadratic obtained by projecting the relative position `tthr`
/// seconds ahead along `v`. Returns `0` if the discriminant is negative or
/// there is no horizontal relative motion.
pub fn timein(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    let (a, b, c) = timein_coefficients(tthr, dthr, s, v);
    if almost_equals(a, 0.0) || discr(a, b, c) < 0.0 {
        return 0.0;
    }
    root(a, b, c, -1.0)
}
