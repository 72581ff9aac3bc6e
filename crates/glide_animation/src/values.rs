//! Animatable value types
//!
//! Anything driven by an animator must be interpolable between two values
//! and comparable, so the evaluator can clamp toward the end value and the
//! animator can detect completion.

use std::fmt::Debug;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Copy + Default + PartialEq + PartialOrd + Debug + Send + 'static {
    /// Interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

// Integers scale the offset in f64 and add it to the exact start in i128,
// so the start value survives for the full i64/u64 range. The offset
// truncates toward zero, which keeps the value from passing the end early.
macro_rules! impl_interpolate_int {
    ($($ty:ty),*) => {
        $(
            impl Interpolate for $ty {
                fn lerp(&self, other: &Self, t: f64) -> Self {
                    let from = *self as i128;
                    let offset = ((*other as i128 - from) as f64 * t) as i128;
                    (from + offset) as $ty
                }
            }
        )*
    };
}

impl_interpolate_int!(i32, i64, u32, u64);

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t as f32
    }
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_lerp_truncates() {
        assert_eq!(0i32.lerp(&500, 0.5), 250);
        assert_eq!(0i32.lerp(&500, 0.999), 499);
        assert_eq!(500i32.lerp(&0, 0.25), 375);
    }

    #[test]
    fn test_unsigned_descending_lerp() {
        assert_eq!(100u32.lerp(&0, 0.5), 50);
        assert_eq!(100u64.lerp(&20, 1.0), 20);
    }

    #[test]
    fn test_wide_int_lerp_keeps_start() {
        let start = (1i64 << 60) + 1;
        let end = start + 1000;
        assert_eq!(start.lerp(&end, 0.0), start);
        assert_eq!(start.lerp(&end, 0.5), start + 500);
        assert_eq!(u64::MAX.lerp(&0, 0.0), u64::MAX);
        assert_eq!(i64::MIN.lerp(&i64::MAX, 0.0), i64::MIN);
    }

    #[test]
    fn test_float_lerp() {
        assert!((0.0f32.lerp(&1.0, 0.25) - 0.25).abs() < f32::EPSILON);
        assert_eq!(10.0f64.lerp(&-10.0, 0.5), 0.0);
    }
}
