//! RGB Spectrum.

use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign};

/// Number of spectral samples to use for `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// RGBSpectrum represents a color with a weighted sum of red, green and blue
/// components.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled spectral values.
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// Black.
    pub const ZERO: Self = Self {
        c: [0.0; RGB_SAMPLES],
    };

    /// White.
    pub const ONE: Self = Self {
        c: [1.0; RGB_SAMPLES],
    };

    /// Create a new `RGBSpectrum` with a constant value across all
    /// channels.
    ///
    /// * `v` - Constant value.
    pub fn new(v: Float) -> Self {
        let ret = Self {
            c: [v; RGB_SAMPLES],
        };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Create a new `RGBSpectrum` from red, green and blue values.
    ///
    /// * `rgb` - RGB value.
    pub fn from_rgb(rgb: &[Float; 3]) -> Self {
        let ret = Self { c: *rgb };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Returns the red, green and blue values.
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }

    /// Returns true if all channels are zero.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns true if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns the largest channel value.
    pub fn max_component_value(&self) -> Float {
        self.c.iter().fold(self.c[0], |a, b| max(a, *b))
    }

    /// Returns the y-coefficient of XYZ colour.
    pub fn y(&self) -> Float {
        0.212671 * self.c[0] + 0.715160 * self.c[1] + 0.072169 * self.c[2]
    }
}

impl Default for RGBSpectrum {
    /// Return a black `RGBSpectrum`.
    fn default() -> Self {
        Self::ZERO
    }
}

impl Clamp<Float> for RGBSpectrum {
    /// Clamps the channel values to given [low, high] interval.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: Float, high: Float) -> Self {
        Self {
            c: [
                clamp(self.c[0], low, high),
                clamp(self.c[1], low, high),
                clamp(self.c[2], low, high),
            ],
        }
    }

    /// Clamps the channel values to [0.0, INFINITY].
    fn clamp_default(&self) -> Self {
        Clamp::clamp(self, 0.0, INFINITY)
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    /// Adds the corresponding channel values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn add(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] + other.c[0],
                self.c[1] + other.c[1],
                self.c[2] + other.c[2],
            ],
        }
    }
}

impl AddAssign for RGBSpectrum {
    /// Adds the corresponding channel values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Multiplies the corresponding channel values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn mul(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] * other.c[0],
                self.c[1] * other.c[1],
                self.c[2] * other.c[2],
            ],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the channel values with a constant factor.
    ///
    /// * `f` - Scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        Self {
            c: [self.c[0] * f, self.c[1] * f, self.c[2] * f],
        }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    /// Scales the channel values of an `RGBSpectrum`.
    ///
    /// * `s` - Channel values.
    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl MulAssign<Float> for RGBSpectrum {
    /// Scales the channel values with a constant factor.
    ///
    /// * `f` - Scaling factor.
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Divides the channel values with given factor.
    ///
    /// * `f` - Scaling value.
    fn div(self, f: Float) -> Self::Output {
        debug_assert!(f != 0.0);
        self * (1.0 / f)
    }
}

impl DivAssign<Float> for RGBSpectrum {
    /// Divides the channel values with given factor.
    ///
    /// * `f` - Scaling value.
    fn div_assign(&mut self, f: Float) {
        *self = *self / f;
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Index the channel value.
    ///
    /// * `i` - The channel index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    /// Index the channel value for mutation.
    ///
    /// * `i` - The channel index.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl fmt::Display for RGBSpectrum {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_black() {
        assert!(RGBSpectrum::default().is_black());
        assert!(!RGBSpectrum::new(0.5).is_black());
    }

    #[test]
    fn clamp_default_removes_negative_channels() {
        let s = RGBSpectrum::from_rgb(&[-1.0, 0.5, 2.0]).clamp_default();
        assert_eq!(s.to_rgb(), [0.0, 0.5, 2.0]);
    }

    #[test]
    fn max_component_value_returns_largest_channel() {
        assert_eq!(RGBSpectrum::from_rgb(&[0.1, 0.7, 0.3]).max_component_value(), 0.7);
    }

    proptest! {
        #[test]
        fn scale_is_component_wise(r in 0.0..1.0f32, g in 0.0..1.0f32, b in 0.0..1.0f32, f in 0.0..10.0f32) {
            let s = RGBSpectrum::from_rgb(&[r, g, b]);
            prop_assert_eq!((s * f).to_rgb(), [r * f, g * f, b * f]);
            prop_assert_eq!(f * s, s * f);
        }

        #[test]
        fn add_is_component_wise(r in 0.0..1.0f32, g in 0.0..1.0f32, b in 0.0..1.0f32) {
            let s = RGBSpectrum::from_rgb(&[r, g, b]);
            let mut t = s;
            t += RGBSpectrum::ONE;
            prop_assert_eq!(t.to_rgb(), [r + 1.0, g + 1.0, b + 1.0]);
        }
    }
}
