//! Keyframe sequence animator
//!
//! An [`AnimatorStep`] plays an ordered list of segments on one property,
//! chaining each segment onto the previous one and stopping after the last.

use crate::animator::{Animate, Animator, SkipReason, TickOutcome};
use crate::curve::Curve;
use crate::error::{AnimationError, Result};
use crate::evaluator::EvaluationParameters;
use crate::property::{Getter, Property, Setter};
use crate::values::Interpolate;
use smallvec::SmallVec;
use std::time::{Duration, Instant};

/// One segment of a step sequence; always interpolated linearly
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParameters<T> {
    pub start_value: T,
    pub end_value: T,
    pub duration: Duration,
}

impl<T: Interpolate> StepParameters<T> {
    pub fn new(start_value: T, end_value: T, duration: Duration) -> Self {
        Self {
            start_value,
            end_value,
            duration,
        }
    }

    pub fn ms(start_value: T, end_value: T, duration_ms: u64) -> Self {
        Self::new(start_value, end_value, Duration::from_millis(duration_ms))
    }

    fn to_params(self) -> EvaluationParameters<T> {
        EvaluationParameters {
            start_value: self.start_value,
            end_value: self.end_value,
            duration: self.duration,
            curve: Curve::Linear,
        }
    }
}

/// Animator playing a sequence of segments back to back
pub struct AnimatorStep<T> {
    animator: Animator<T>,
    steps: SmallVec<[StepParameters<T>; 4]>,
    cursor: usize,
    started: bool,
    finished: bool,
}

impl<T: Interpolate> AnimatorStep<T> {
    pub fn new() -> Self {
        Self {
            animator: Animator::new(),
            steps: SmallVec::new(),
            cursor: 0,
            started: false,
            finished: false,
        }
    }

    /// Builder: append a segment
    pub fn step(mut self, step: StepParameters<T>) -> Result<Self> {
        self.add_step(step)?;
        Ok(self)
    }

    /// Builder: bind the property to animate
    pub fn bound(mut self, property: Property<T>) -> Self {
        self.animator.bind(property);
        self
    }

    /// Append a segment to the sequence
    ///
    /// A sequence in progress picks the new segment up when it reaches it;
    /// a finished sequence only sees it after the next `start`.
    pub fn add_step(&mut self, step: StepParameters<T>) -> Result<()> {
        if step.duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        self.steps.push(step);
        Ok(())
    }

    pub fn bind(&mut self, property: Property<T>) {
        self.animator.bind(property);
    }

    pub fn set_getter(&mut self, getter: Option<Getter<T>>) {
        self.animator.set_getter(getter);
    }

    pub fn set_setter(&mut self, setter: Option<Setter<T>>) {
        self.animator.set_setter(setter);
    }

    pub fn steps(&self) -> &[StepParameters<T>] {
        &self.steps
    }

    /// Index of the segment currently playing
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Parameters of the segment currently loaded
    pub fn current_params(&self) -> &EvaluationParameters<T> {
        self.animator.params()
    }

    fn load(&mut self, index: usize, now: Instant) {
        self.cursor = index;
        // Segment durations are validated in add_step
        let _ = self.animator.set_params(self.steps[index].to_params());
        self.animator.start_at(now);
    }
}

impl<T: Interpolate> Default for AnimatorStep<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interpolate> Animate for AnimatorStep<T> {
    fn start_at(&mut self, now: Instant) {
        self.started = true;
        self.cursor = 0;
        self.finished = self.steps.is_empty();
        if !self.finished {
            self.load(0, now);
        }
    }

    fn animate_at(&mut self, now: Instant) -> TickOutcome {
        if self.steps.is_empty() || self.finished {
            return TickOutcome::Skipped(SkipReason::Completed);
        }
        if !self.started {
            return TickOutcome::Skipped(SkipReason::NotStarted);
        }

        let outcome = self.animator.animate_at(now);
        if !self.animator.is_finished() {
            return outcome;
        }

        let next = self.cursor + 1;
        if next < self.steps.len() {
            tracing::trace!(step = next, "step animator advancing to next segment");
            self.load(next, now);
            TickOutcome::Advanced
        } else {
            self.finished = true;
            TickOutcome::Finished
        }
    }

    fn is_finished(&self) -> bool {
        self.steps.is_empty() || self.finished
    }

    /// Total length of all segments
    fn duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }

    fn set_duration(&mut self, _duration: Duration) -> Result<()> {
        Err(AnimationError::Unsupported(
            "step animators take their timing from each step",
        ))
    }

    fn curve(&self) -> Curve {
        Curve::Linear
    }

    fn set_curve(&mut self, curve: Curve) -> Result<()> {
        match curve {
            Curve::Linear => Ok(()),
            _ => Err(AnimationError::Unsupported(
                "step animators only interpolate linearly",
            )),
        }
    }
}
