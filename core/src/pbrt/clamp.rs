//! Clamp

use num_traits::Num;

/// Clamps a value x to [min, max].
///
/// See https://github.com/rust-lang/rust/issues/44095
///
/// * `x` - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Interface for clamping values.
pub trait Clamp<T: Copy> {
    /// Clamps the values to given [low, high] interval.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: T, high: T) -> Self;

    /// Clamps the values to some default [low, high] interval determined by
    /// `T`.
    fn clamp_default(&self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_to_interval() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }
}
