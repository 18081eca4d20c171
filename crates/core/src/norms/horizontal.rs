//! Horizontal norm components
//!
//! Two terms, both normalized by DTHR:
//! - `horizontal_wcv_xdist`: horizontal miss distance at closest approach.
//! - `horizontal_wcv_ydist`: time-based term. When the pair is diverging it
//!   measures how far past closest approach they are; when converging it
//!   compares the time to closest approach with the entry time into the
//!   time-weighted protected volume.

use crate::core_types::{almost_equals, Vect3};
use crate::geometry::approach::timein_coefficients;
use crate::geometry::{discr, root, tcpa};

/// Miss distance at closest approach over `dthr`.
///
/// With (almost) zero horizontal velocity this is `s.x / dthr`, signed and
/// without a square root.
pub fn horizontal_wcv_xdist(_tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    if almost_equals(v.sq_norm2(), 0.0) {
        return s.x() / dthr;
    }
    s.add_scal(tcpa(s, v), v).norm2() / dthr
}

/// Time-based horizontal term.
///
/// Branches, in order:
/// 1. zero horizontal velocity: `s.y / dthr`;
/// 2. diverging (`s·v >= 0`): distance travelled since closest approach,
///    `‖v‖·|tcpa| / dthr`;
/// 3. closest approach outside `dthr`: `0`;
/// 4. otherwise the entry root `r` of the time-weighted quadratic is blended
///    with `tcpa`: `tcpa / (tcpa - r)` if `r <= 0`, else `r / (tcpa - r) + 1`.
///
/// In branch 4, `tcpa - r` only vanishes when the trajectory grazes the
/// boundary (double root at `tcpa`). Approaching that geometry from just
/// inside the boundary the ratio is unbounded, so there is no limit to take:
/// the grazing case is answered with `1`, the boundary value, by convention.
/// A discriminant that rounds below zero is the same grazing geometry and
/// gets the same answer.
pub fn horizontal_wcv_ydist(tthr: f64, dthr: f64, s: Vect3, v: Vect3) -> f64 {
    let tca = tcpa(s, v);
    let tcadist = s.add_scal(tca, v).norm2();
    if almost_equals(v.sq_norm2(), 0.0) {
        return s.y() / dthr;
    }
    if s.dot2(v) >= 0.0 {
        return v.norm2() * tca.abs() / dthr;
    }
    if tcadist > dthr {
        return 0.0;
    }

    let (a, b, c) = timein_coefficients(tthr, dthr, s, v);
    if discr(a, b, c) < 0.0 {
        tracing::trace!(tca, tcadist, "ydist: negative discriminant, grazing boundary");
        return 1.0;
    }
    let entry = root(a, b, c, -1.0);
    let span = tca - entry;
    if almost_equals(span, 0.0) {
        tracing::trace!(tca, entry, "ydist: entry root coincides with tcpa");
        return 1.0;
    }

    if entry <= 0.0 {
        tca / span
    } else {
        entry / span + 1.0
    }
}
