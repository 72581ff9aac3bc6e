//! Curve evaluation
//!
//! An [`Evaluator`] maps elapsed time onto a value between a start and end
//! value. It never reads the clock: the tick source measures elapsed time and
//! passes it in, which keeps evaluation deterministic.

use crate::curve::Curve;
use crate::error::{AnimationError, Result};
use crate::values::Interpolate;
use std::time::Duration;

/// Parameters of one animation cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationParameters<T> {
    pub start_value: T,
    pub end_value: T,
    pub duration: Duration,
    pub curve: Curve,
}

impl<T: Interpolate> EvaluationParameters<T> {
    /// Create parameters, rejecting a zero duration
    pub fn new(start_value: T, end_value: T, duration: Duration, curve: Curve) -> Result<Self> {
        if duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        Ok(Self {
            start_value,
            end_value,
            duration,
            curve,
        })
    }

    /// Linear parameters with the duration given in milliseconds
    pub fn linear_ms(start_value: T, end_value: T, duration_ms: u64) -> Result<Self> {
        Self::new(
            start_value,
            end_value,
            Duration::from_millis(duration_ms),
            Curve::Linear,
        )
    }

    /// Unconfigured parameters: zero duration, linear curve
    pub(crate) fn unconfigured(value: T) -> Self {
        Self {
            start_value: value,
            end_value: value,
            duration: Duration::ZERO,
            curve: Curve::Linear,
        }
    }

    /// Whether the ramp runs upward (or is flat)
    pub fn is_ascending(&self) -> bool {
        self.end_value >= self.start_value
    }
}

/// Time-to-value curve function
#[derive(Clone, Debug)]
pub struct Evaluator<T> {
    params: EvaluationParameters<T>,
}

impl<T: Interpolate> Evaluator<T> {
    pub fn new(params: EvaluationParameters<T>) -> Self {
        Self { params }
    }

    pub fn set_params(&mut self, params: EvaluationParameters<T>) {
        self.params = params;
    }

    pub fn params(&self) -> &EvaluationParameters<T> {
        &self.params
    }

    /// Value of the animation `elapsed` after its start
    ///
    /// The result moves monotonically toward the end value and is exactly
    /// the end value once `elapsed >= duration`. A zero duration jumps
    /// straight to the end value.
    pub fn evaluate(&self, elapsed: Duration) -> T {
        let p = &self.params;
        if p.duration.is_zero() {
            return p.end_value;
        }

        let progress = elapsed.as_secs_f64() / p.duration.as_secs_f64();
        if progress >= 1.0 {
            return p.end_value;
        }

        let value = p.start_value.lerp(&p.end_value, p.curve.apply(progress));

        // Never step past the end value, whichever way the ramp runs
        if p.is_ascending() {
            if value >= p.end_value {
                return p.end_value;
            }
        } else if value <= p.end_value {
            return p.end_value;
        }

        value
    }
}
