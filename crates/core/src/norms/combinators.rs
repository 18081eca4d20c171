//! Symmetric-polynomial combinators
//!
//! Blend per-dimension severity terms into one value so that no single term
//! dominates linearly. Any input at or above `1` saturates the result.

use crate::core_types::sq;

/// `sqrt(x² + (1 - x²)·y²)`, or `max(x, y)` once either input reaches `1`.
pub fn sympoly2(x: f64, y: f64) -> f64 {
    let m = x.max(y);
    if m >= 1.0 {
        return m;
    }
    (sq(x) + (1.0 - sq(x)) * sq(y)).sqrt()
}

/// Three-way blend: `sympoly2(sympoly2(x, y), z)`, or the max once any input reaches `1`.
pub fn sympoly3(x: f64, y: f64, z: f64) -> f64 {
    let m = x.max(y).max(z);
    if m >= 1.0 {
        return m;
    }
    sympoly2(sympoly2(x, y), z)
}

/// Complement product `1 - (1 - x)(1 - y)(1 - z)`.
pub fn complement_product(x: f64, y: f64, z: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - y) * (1.0 - z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sympoly2_reduces_to_other_input_at_zero() {
        assert_eq!(sympoly2(0.0, 0.5), 0.5);
        assert_eq!(sympoly2(0.5, 0.0), 0.5);
    }

    #[test]
    fn test_sympoly2_saturates() {
        assert_eq!(sympoly2(0.6, 1.2), 1.2);
        assert_eq!(sympoly2(1.0, 0.3), 1.0);
    }

    #[test]
    fn test_sympoly2_symmetric() {
        // x² + y² - x²y² is symmetric in x and y
        assert_relative_eq!(sympoly2(0.3, 0.8), sympoly2(0.8, 0.3), epsilon = 1e-15);
    }

    #[test]
    fn test_sympoly2_stays_below_one() {
        let v = sympoly2(0.99, 0.99);
        assert!(v < 1.0 && v > 0.99, "sympoly2(0.99, 0.99) = {v}");
    }

    #[test]
    fn test_sympoly3_nesting_and_saturation() {
        assert_relative_eq!(sympoly3(0.5, 0.5, 0.0), (0.25_f64 + 0.75 * 0.25).sqrt(), epsilon = 1e-12);
        assert_eq!(sympoly3(0.2, 1.5, 0.9), 1.5);
    }

    #[test]
    fn test_complement_product() {
        assert_eq!(complement_product(0.0, 0.0, 0.0), 0.0);
        assert_eq!(complement_product(1.0, 0.2, 0.3), 1.0);
        assert_relative_eq!(complement_product(0.5, 0.5, 0.0), 0.75);
    }
}
