//! Relative-state vector type for positions and velocities.
//!
//! `Vect3` wraps `nalgebra::Vector3<f64>` behind named, read-only accessors.
//! Every operation returns a new value, so vectors can be passed freely through
//! the norm functions without aliasing concerns.
//!
//! Most operations here are *horizontal*: they only look at the x/y plane and
//! ignore z, which is handled separately by the vertical norm.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::error::{Result, WcvError};

/// Absolute tolerance used for every near-zero and approximate-equality check.
pub const ALMOST_EQUALS_TOLERANCE: f64 = 1e-8;

/// Approximate scalar equality with absolute tolerance `1e-8`.
#[inline]
pub fn almost_equals(a: f64, b: f64) -> bool {
    (a - b).abs() < ALMOST_EQUALS_TOLERANCE
}

/// Square of a scalar.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Relative position or relative velocity in a common reference frame.
///
/// Immutable value type: components are read through `x()`, `y()`, `z()`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
#[repr(transparent)]
pub struct Vect3(Vector3<f64>);

impl Vect3 {
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vect3(Vector3::new(x, y, z))
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Vect3(Vector3::zeros())
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Checked component lookup (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    /// Returns [`WcvError::InvalidComponent`] for any index outside `0..=2`.
    pub fn component(self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.0.x),
            1 => Ok(self.0.y),
            2 => Ok(self.0.z),
            _ => Err(WcvError::InvalidComponent { index }),
        }
    }

    /// Horizontal dot product, z ignored.
    #[inline]
    pub fn dot2(self, other: Self) -> f64 {
        self.0.x * other.0.x + self.0.y * other.0.y
    }

    /// Horizontal squared norm.
    #[inline]
    pub fn sq_norm2(self) -> f64 {
        sq(self.0.x) + sq(self.0.y)
    }

    /// Horizontal norm.
    #[inline]
    pub fn norm2(self) -> f64 {
        self.sq_norm2().sqrt()
    }

    /// Right-perpendicular rotation in the horizontal plane: `(x, y, z) -> (y, -x, z)`.
    #[inline]
    pub fn perp_r(self) -> Self {
        Vect3::new(self.0.y, -self.0.x, self.0.z)
    }

    /// Signed horizontal cross product, `dot2(self, perp_r(other))`.
    #[inline]
    pub fn det2(self, other: Self) -> f64 {
        self.dot2(other.perp_r())
    }

    /// `self + other * k`, the straight-line state after `k` time units.
    #[inline]
    pub fn add_scal(self, k: f64, other: Self) -> Self {
        Vect3(self.0 + other.0 * k)
    }

    /// Componentwise equality within [`ALMOST_EQUALS_TOLERANCE`].
    pub fn almost_equals(self, other: Self) -> bool {
        almost_equals(self.0.x, other.0.x)
            && almost_equals(self.0.y, other.0.y)
            && almost_equals(self.0.z, other.0.z)
    }
}

impl From<Vector3<f64>> for Vect3 {
    fn from(v: Vector3<f64>) -> Self {
        Vect3(v)
    }
}

impl From<Vect3> for Vector3<f64> {
    fn from(v: Vect3) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vect3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vect3::new(x, y, z)
    }
}

impl From<Vect3> for [f64; 3] {
    fn from(v: Vect3) -> Self {
        [v.0.x, v.0.y, v.0.z]
    }
}

impl Add for Vect3 {
    type Output = Vect3;
    #[inline]
    fn add(self, rhs: Vect3) -> Vect3 {
        Vect3(self.0 + rhs.0)
    }
}

impl Sub for Vect3 {
    type Output = Vect3;
    #[inline]
    fn sub(self, rhs: Vect3) -> Vect3 {
        Vect3(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vect3 {
    type Output = Vect3;
    #[inline]
    fn mul(self, rhs: f64) -> Vect3 {
        Vect3(self.0 * rhs)
    }
}

/// Division by zero is not guarded here; callers check the divisor first.
impl Div<f64> for Vect3 {
    type Output = Vect3;
    #[inline]
    fn div(self, rhs: f64) -> Vect3 {
        Vect3(self.0 / rhs)
    }
}

impl Neg for Vect3 {
    type Output = Vect3;
    #[inline]
    fn neg(self) -> Vect3 {
        Vect3(-self.0)
    }
}

impl Index<usize> for Vect3 {
    type Output = f64;

    /// Panics on an index outside `0..=2`; use [`Vect3::component`] for untrusted input.
    #[track_caller]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.0.x,
            1 => &self.0.y,
            2 => &self.0.z,
            _ => panic!("Vect3 index out of range: {index} (expected 0, 1 or 2)"),
        }
    }
}

impl fmt::Display for Vect3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
