//! Single-value animator
//!
//! [`Animate`] is the interface the manager drives; [`Animator`] is the
//! simplest implementation, moving one property from a start value to an end
//! value over a duration.

use crate::curve::Curve;
use crate::error::{AnimationError, Result};
use crate::evaluator::{EvaluationParameters, Evaluator};
use crate::property::{Getter, Property, Setter};
use crate::values::Interpolate;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Why a tick did not advance an animator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Getter or setter is missing
    Unbound,
    /// The getter reported that its target no longer exists
    TargetGone,
    /// `start` has not been called yet
    NotStarted,
    /// A finite sequence has played out
    Completed,
}

/// Result of one `animate` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new value was written
    Advanced,
    /// The end value was written
    Finished,
    /// Nothing was read or written
    Skipped(SkipReason),
}

impl TickOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, TickOutcome::Skipped(_))
    }
}

/// Interface shared by every animator kind
///
/// Timestamps are passed in by the tick source. `start` and `animate` read
/// the clock themselves for callers that don't care.
pub trait Animate: Send {
    /// Arm the animation with `now` as its origin
    fn start_at(&mut self, now: Instant);

    /// Advance the animation to `now`
    fn animate_at(&mut self, now: Instant) -> TickOutcome;

    /// True once the end value has been written
    fn is_finished(&self) -> bool;

    fn duration(&self) -> Duration;

    fn set_duration(&mut self, duration: Duration) -> Result<()>;

    fn curve(&self) -> Curve;

    fn set_curve(&mut self, curve: Curve) -> Result<()>;

    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn animate(&mut self) -> TickOutcome {
        self.animate_at(Instant::now())
    }
}

/// An animator shared between the manager and application code
pub type SharedAnimator = Arc<Mutex<dyn Animate>>;

/// Animator for one property
pub struct Animator<T> {
    params: EvaluationParameters<T>,
    evaluator: Evaluator<T>,
    property: Property<T>,
    start_time: Option<Instant>,
    finished: bool,
}

impl<T: Interpolate> Animator<T> {
    /// New animator with zero start/end values, zero duration and a linear curve
    pub fn new() -> Self {
        Self::with_params(EvaluationParameters::unconfigured(T::default()))
    }

    pub fn with_params(params: EvaluationParameters<T>) -> Self {
        Self {
            params,
            evaluator: Evaluator::new(params),
            property: Property::unbound(),
            start_time: None,
            finished: false,
        }
    }

    /// Builder: bind the property to animate
    pub fn bound(mut self, property: Property<T>) -> Self {
        self.property = property;
        self
    }

    pub fn bind(&mut self, property: Property<T>) {
        self.property = property;
    }

    pub fn set_getter(&mut self, getter: Option<Getter<T>>) {
        self.property.set_getter(getter);
    }

    pub fn set_setter(&mut self, setter: Option<Setter<T>>) {
        self.property.set_setter(setter);
    }

    pub fn start_value(&self) -> T {
        self.params.start_value
    }

    pub fn set_start_value(&mut self, value: T) {
        self.params.start_value = value;
    }

    pub fn end_value(&self) -> T {
        self.params.end_value
    }

    pub fn set_end_value(&mut self, value: T) {
        self.params.end_value = value;
    }

    /// Set the duration in milliseconds
    pub fn set_duration_ms(&mut self, duration_ms: u64) -> Result<()> {
        self.set_duration(Duration::from_millis(duration_ms))
    }

    /// Parameters used by the next `start`
    pub fn params(&self) -> &EvaluationParameters<T> {
        &self.params
    }

    pub fn set_params(&mut self, params: EvaluationParameters<T>) -> Result<()> {
        if params.duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        self.params = params;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }
}

impl<T: Interpolate> Default for Animator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interpolate> Animate for Animator<T> {
    fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
        self.finished = false;
        self.evaluator.set_params(self.params);
    }

    fn animate_at(&mut self, now: Instant) -> TickOutcome {
        if !self.property.is_bound() {
            tracing::trace!("animator skipped: property unbound");
            return TickOutcome::Skipped(SkipReason::Unbound);
        }
        let Some(start_time) = self.start_time else {
            return TickOutcome::Skipped(SkipReason::NotStarted);
        };
        let Some(current) = self.property.get() else {
            tracing::trace!("animator skipped: target gone");
            return TickOutcome::Skipped(SkipReason::TargetGone);
        };

        let value = self
            .evaluator
            .evaluate(now.saturating_duration_since(start_time));
        if value == self.evaluator.params().end_value {
            self.finished = true;
        }
        tracing::trace!(?current, ?value, finished = self.finished, "animator advanced");

        // Written even when finished; deregister to stop the writes
        self.property.set(value);

        if self.finished {
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn duration(&self) -> Duration {
        self.params.duration
    }

    fn set_duration(&mut self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        self.params.duration = duration;
        Ok(())
    }

    fn curve(&self) -> Curve {
        self.params.curve
    }

    fn set_curve(&mut self, curve: Curve) -> Result<()> {
        self.params.curve = curve;
        Ok(())
    }
}
