//! Grouped animator
//!
//! An [`AnimatorGroup`] drives many properties in lockstep: every entry has
//! its own start/end values and duration, but all of them share the group's
//! start time.

use crate::animator::{Animate, SkipReason, TickOutcome};
use crate::curve::Curve;
use crate::error::{AnimationError, Result};
use crate::evaluator::{EvaluationParameters, Evaluator};
use crate::property::Property;
use crate::values::Interpolate;
use slotmap::{new_key_type, SlotMap};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to one entry of an animator group
    pub struct GroupEntryId;
}

/// An entry in a group
struct GroupEntry<T> {
    params: EvaluationParameters<T>,
    evaluator: Evaluator<T>,
    property: Property<T>,
    /// Set once the entry has written its end value since the last start
    reached_end: bool,
}

/// Animator that moves several properties with one shared clock
pub struct AnimatorGroup<T> {
    entries: SlotMap<GroupEntryId, GroupEntry<T>>,
    start_time: Option<Instant>,
}

impl<T: Interpolate> AnimatorGroup<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            start_time: None,
        }
    }

    /// Add a property to the group
    ///
    /// Entries always interpolate linearly; any other requested curve is
    /// replaced.
    pub fn add_animation(
        &mut self,
        property: Property<T>,
        params: EvaluationParameters<T>,
    ) -> Result<GroupEntryId> {
        if params.duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        if params.curve != Curve::Linear {
            tracing::debug!(requested = ?params.curve, "group entry curve forced to linear");
        }
        let params = EvaluationParameters {
            curve: Curve::Linear,
            ..params
        };

        Ok(self.entries.insert(GroupEntry {
            params,
            evaluator: Evaluator::new(params),
            property,
            reached_end: false,
        }))
    }

    /// Remove a property from the group
    pub fn remove_animation(&mut self, id: GroupEntryId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters of one entry
    pub fn entry_params(&self, id: GroupEntryId) -> Option<&EvaluationParameters<T>> {
        self.entries.get(id).map(|entry| &entry.params)
    }
}

impl<T: Interpolate> Default for AnimatorGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interpolate> Animate for AnimatorGroup<T> {
    fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
        for (_, entry) in self.entries.iter_mut() {
            entry.evaluator.set_params(entry.params);
            entry.reached_end = false;
        }
    }

    fn animate_at(&mut self, now: Instant) -> TickOutcome {
        let Some(start_time) = self.start_time else {
            return TickOutcome::Skipped(SkipReason::NotStarted);
        };
        let elapsed = now.saturating_duration_since(start_time);

        let (mut advanced, mut unbound) = (0usize, 0usize);
        for (id, entry) in self.entries.iter_mut() {
            if !entry.property.is_bound() {
                tracing::trace!(?id, "group entry skipped: property unbound");
                unbound += 1;
                continue;
            }
            if entry.property.get().is_none() {
                tracing::trace!(?id, "group entry skipped: target gone");
                continue;
            }

            let value = entry.evaluator.evaluate(elapsed);
            if value == entry.evaluator.params().end_value {
                entry.reached_end = true;
            }
            entry.property.set(value);
            advanced += 1;
        }

        if advanced == 0 && !self.entries.is_empty() {
            // Gone only when every entry had a target that went away
            let reason = if unbound == 0 {
                SkipReason::TargetGone
            } else {
                SkipReason::Unbound
            };
            TickOutcome::Skipped(reason)
        } else if self.is_finished() {
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    fn is_finished(&self) -> bool {
        self.entries.iter().all(|(_, entry)| entry.reached_end)
    }

    /// Longest entry duration
    fn duration(&self) -> Duration {
        self.entries
            .iter()
            .map(|(_, entry)| entry.params.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Apply one duration to every entry
    fn set_duration(&mut self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Err(AnimationError::InvalidDuration);
        }
        for (_, entry) in self.entries.iter_mut() {
            entry.params.duration = duration;
        }
        Ok(())
    }

    fn curve(&self) -> Curve {
        Curve::Linear
    }

    fn set_curve(&mut self, curve: Curve) -> Result<()> {
        match curve {
            Curve::Linear => Ok(()),
            _ => Err(AnimationError::Unsupported(
                "group entries only interpolate linearly",
            )),
        }
    }
}
