//! Quadratic root selection
//!
//! Two root families are used: the standard form of `a·t² + b·t + c = 0` and
//! the "half-b" form where the linear coefficient is written as `2b`.
//! `eps` picks the root: `-1` for the smaller, `+1` for the larger when `a > 0`.
//!
//! None of these functions guard the discriminant. Callers check it first and
//! answer a negative value with their own sentinel.

use crate::core_types::sq;

/// Discriminant of `a·t² + b·t + c`.
#[inline]
pub fn discr(a: f64, b: f64, c: f64) -> f64 {
    sq(b) - 4.0 * a * c
}

/// Root of `a·t² + b·t + c = 0` selected by `eps`.
#[inline]
pub fn root(a: f64, b: f64, c: f64, eps: f64) -> f64 {
    (-b + eps * discr(a, b, c).sqrt()) / (2.0 * a)
}

/// Discriminant of `a·t² + 2b·t + c`.
#[inline]
pub fn discr2b(a: f64, b: f64, c: f64) -> f64 {
    sq(b) - a * c
}

/// Root of `a·t² + 2b·t + c = 0` selected by `eps`.
#[inline]
pub fn root2b(a: f64, b: f64, c: f64, eps: f64) -> f64 {
    (-b + eps * discr2b(a, b, c).sqrt()) / a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_selects_by_sign() {
        // (t - 2)(t - 5) = t² - 7t + 10
        assert_eq!(discr(1.0, -7.0, 10.0), 9.0);
        assert_relative_eq!(root(1.0, -7.0, 10.0, -1.0), 2.0);
        assert_relative_eq!(root(1.0, -7.0, 10.0, 1.0), 5.0);
    }

    #[test]
    fn test_half_b_form_matches_standard_form() {
        // t² - 7t + 10 with b = -3.5 in half-b form
        assert_eq!(discr2b(1.0, -3.5, 10.0), 2.25);
        assert_relative_eq!(root2b(1.0, -3.5, 10.0, -1.0), root(1.0, -7.0, 10.0, -1.0));
        assert_relative_eq!(root2b(1.0, -3.5, 10.0, 1.0), root(1.0, -7.0, 10.0, 1.0));
    }

    #[test]
    fn test_double_root() {
        // (t + 3)² = t² + 6t + 9
        assert_eq!(discr(1.0, 6.0, 9.0), 0.0);
        assert_eq!(root(1.0, 6.0, 9.0, -1.0), root(1.0, 6.0, 9.0, 1.0));
        assert_relative_eq!(root(1.0, 6.0, 9.0, 1.0), -3.0);
    }
}
