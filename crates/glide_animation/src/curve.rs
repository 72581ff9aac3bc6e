//! Interpolation curves for animations

/// Interpolation shape applied to normalized progress
///
/// Every curve is monotonic on `[0, 1]`, starts at 0 and ends at 1, so the
/// evaluator can always terminate exactly on the end value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Curve {
    /// Apply the curve to a progress value (0.0 to 1.0)
    ///
    /// Progress outside the unit range is clamped first.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseInQuad => t * t,
            Curve::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Curve::EaseInCubic => t * t * t,
            Curve::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Curve::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// All curve kinds, in declaration order
    pub const ALL: [Curve; 7] = [
        Curve::Linear,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in Curve::ALL {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-12, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for curve in Curve::ALL {
            let mut prev = curve.apply(0.0);
            for i in 1..=100 {
                let value = curve.apply(i as f64 / 100.0);
                assert!(value >= prev, "{curve:?} decreased at step {i}");
                prev = value;
            }
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Curve::Linear.apply(1.5), 1.0);
        assert_eq!(Curve::EaseOutCubic.apply(-0.5), 0.0);
    }
}
