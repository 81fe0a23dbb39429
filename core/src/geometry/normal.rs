//! 3-D normals

use super::common::*;
use super::Vector3;
use crate::pbrt::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg};

/// A 3-D normal containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Normal3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D normal containing `Float` values.
pub type Normal3f = Normal3<Float>;
impl Normal3f {
    /// Zero normal.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
}

impl<T: Num> Normal3<T> {
    /// Creates a new 3-D normal.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero normal.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the square of the normal's length.
    pub fn length_squared(&self) -> T
    where
        T: Mul<Output = T> + Add<Output = T> + Copy,
    {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the normal's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit normal.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self / self.length()
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Dot<Normal3<T>> for Normal3<T> {
    type Output = T;

    /// Returns the dot product with another normal.
    ///
    /// * `other` - The other normal.
    fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Dot<Vector3<T>> for Normal3<T> {
    type Output = T;

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

// Implement FaceForward trait which allows pointing normals in the same hemisphere as another vector/normal.
impl<T: Num + Neg<Output = T> + PartialOrd + Copy> FaceForward<T, Vector3<T>> for Normal3<T> {}
impl<T: Num + Neg<Output = T> + PartialOrd + Copy> FaceForward<T, Normal3<T>> for Normal3<T> {}

impl<T: Num + Copy> Mul<T> for Normal3<T> {
    type Output = Self;

    /// Scale the normal.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::new(f * self.x, f * self.y, f * self.z)
    }
}

macro_rules! premul {
    ($t: ty) => {
        impl Mul<Normal3<$t>> for $t {
            type Output = Normal3<$t>;
            /// Scale the normal.
            ///
            /// * `n` - The normal.
            fn mul(self, n: Normal3<$t>) -> Normal3<$t> {
                Normal3::new(self * n.x, self * n.y, self * n.z)
            }
        }
    };
}

premul!(f32);
premul!(f64);

impl<T: Num + Copy> Div<T> for Normal3<T> {
    type Output = Self;

    /// Scale the normal by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self::Output {
        debug_assert!(!f.is_zero());

        let inv = T::one() / f;
        Self::Output::new(inv * self.x, inv * self.y, inv * self.z)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Normal3<T> {
    type Output = Self;

    /// Flip the normal's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y, -self.z)
    }
}

impl<T> From<Vector3<T>> for Normal3<T> {
    /// Convert a 3-D vector to a 3-D normal.
    ///
    /// * `v` - 3-D vector.
    fn from(v: Vector3<T>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl<T: fmt::Display> fmt::Display for Normal3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
mod tests {
    use super::*;
    use crate::geometry::*;
    use proptest::prelude::*;

    #[test]
    fn zero_normal() {
        assert!(Normal3::new(0, 0, 0) == Normal3::zero());
        assert!(Normal3::new(0.0, 0.0, 0.0) == Normal3f::ZERO);
    }

    #[test]
    fn has_nans() {
        assert!(!Normal3::new(0.0, 0.0, 0.0).has_nans());
        assert!(Normal3::new(f32::NAN, f32::NAN, f32::NAN).has_nans());
    }

    #[test]
    fn face_forward_flips_only_when_facing_away() {
        let n = Normal3f::new(0.0, 0.0, 1.0);
        assert_eq!(n.face_forward(&Vector3f::new(0.0, 0.3, 0.7)), n);
        assert_eq!(n.face_forward(&Vector3f::new(0.0, 0.3, -0.7)), -n);
        // A tangent view direction keeps the normal as is.
        assert_eq!(n.face_forward(&Vector3f::new(1.0, 0.0, 0.0)), n);
    }

    prop_vector3!(vector3_f32, f32, -100.0..100.0f32, -100.0..100.0f32, -100.0..100.0f32);

    proptest! {
        #[test]
        fn dot_with_vector_matches_components(v in vector3_f32(), w in vector3_f32()) {
            let n = Normal3::from(v);
            prop_assert_eq!(n.dot(&w), v.x * w.x + v.y * w.y + v.z * w.z);
            prop_assert_eq!(n.dot(&w), w.dot(&n));
        }

        #[test]
        fn neg_f32(v in vector3_f32()) {
            let n = Normal3::from(v);
            prop_assert_eq!(-n, Normal3::new(-n.x, -n.y, -n.z));
            prop_assert_eq!(-(-n), n);
        }
    }
}
