//! Animation manager
//!
//! Owns the registry of active animators and the timer that ticks them.
//! Every tick calls `animate` on each registered animator, in registration
//! order. Registering an animator does not start it, and starting the
//! manager does not start any animator: the two clocks are armed separately.
//!
//! Managers are normally constructed by the application and passed to the
//! code that needs them. [`AnimationManager::instance`] provides a lazily
//! built process-wide instance for hosts that prefer a global.

use crate::animator::{Animate, SharedAnimator, TickOutcome};
use crate::config::ManagerConfig;
use crate::error::Result;
use crate::timer::Timer;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

// ============================================================================
// Global Animation Manager
// ============================================================================

static GLOBAL_MANAGER: OnceLock<AnimationManager> = OnceLock::new();

/// Counters accumulated over the manager's lifetime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManagerStats {
    /// Number of completed ticks
    pub ticks: u64,
    /// Number of `animate` calls that skipped their animator
    pub skipped: u64,
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub finished: usize,
    pub skipped: usize,
}

impl TickReport {
    pub fn total(&self) -> usize {
        self.advanced + self.finished + self.skipped
    }
}

/// State shared with the timer thread
struct Registry {
    animators: Mutex<Vec<SharedAnimator>>,
    // Held for a whole tick so timer and host ticks never interleave
    tick_lock: Mutex<()>,
    ticks: AtomicU64,
    skipped: AtomicU64,
}

impl Registry {
    fn new() -> Self {
        Self {
            animators: Mutex::new(Vec::new()),
            tick_lock: Mutex::new(()),
            ticks: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
        }
    }

    fn animators(&self) -> std::sync::MutexGuard<'_, Vec<SharedAnimator>> {
        self.animators.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn tick(&self, now: Instant) -> TickReport {
        let _serial = self.tick_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Iterate a snapshot so registration never waits on a tick and
        // changes made during this tick apply from the next one
        let snapshot: Vec<SharedAnimator> = self.animators().clone();

        let mut report = TickReport::default();
        for animator in &snapshot {
            let outcome = animator
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .animate_at(now);
            match outcome {
                TickOutcome::Advanced => report.advanced += 1,
                TickOutcome::Finished => report.finished += 1,
                TickOutcome::Skipped(reason) => {
                    tracing::trace!(?reason, "animator skipped");
                    report.skipped += 1;
                }
            }
        }

        self.ticks.fetch_add(1, Ordering::Relaxed);
        self.skipped
            .fetch_add(report.skipped as u64, Ordering::Relaxed);
        tracing::trace!(
            advanced = report.advanced,
            finished = report.finished,
            skipped = report.skipped,
            "animation tick"
        );
        report
    }
}

fn same_animator<A: Animate + ?Sized>(a: &Arc<Mutex<A>>, b: &SharedAnimator) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Drives every registered animator from one timer
pub struct AnimationManager {
    registry: Arc<Registry>,
    timeout_ms: AtomicU32,
    timer: Mutex<Option<Timer>>,
}

impl AnimationManager {
    /// New manager with a zero timeout and an empty registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            timeout_ms: AtomicU32::new(0),
            timer: Mutex::new(None),
        }
    }

    /// New manager from configuration, starting the timer if requested
    pub fn with_config(config: &ManagerConfig) -> Result<Self> {
        let manager = Self::new();
        manager.set_timeout(config.timeout_ms);
        if config.autostart {
            manager.start_animation()?;
        }
        Ok(manager)
    }

    /// The process-wide manager, built on first use
    pub fn instance() -> &'static AnimationManager {
        GLOBAL_MANAGER.get_or_init(AnimationManager::new)
    }

    /// Register an animator to receive ticks
    pub fn add_animator(&self, animator: SharedAnimator) {
        let mut animators = self.registry.animators();
        animators.push(animator);
        tracing::debug!(count = animators.len(), "animator registered");
    }

    /// Deregister an animator; returns false if it was not registered
    pub fn delete_animator<A: Animate + ?Sized>(&self, animator: &Arc<Mutex<A>>) -> bool {
        let mut animators = self.registry.animators();
        let before = animators.len();
        animators.retain(|registered| !same_animator(animator, registered));
        let removed = animators.len() != before;
        if removed {
            tracing::debug!(count = animators.len(), "animator deregistered");
        }
        removed
    }

    pub fn contains<A: Animate + ?Sized>(&self, animator: &Arc<Mutex<A>>) -> bool {
        self.registry
            .animators()
            .iter()
            .any(|registered| same_animator(animator, registered))
    }

    pub fn animator_count(&self) -> usize {
        self.registry.animators().len()
    }

    /// Start ticking at the configured timeout
    ///
    /// A running timer is restarted so a changed timeout takes effect.
    ///
    /// Safe to call from a getter or setter running inside a tick.
    pub fn start_animation(&self) -> Result<()> {
        // Never hold the slot while joining: the tick being joined may be
        // waiting on it
        self.stop_animation();

        let registry = Arc::clone(&self.registry);
        let interval = Duration::from_millis(self.timeout() as u64);
        let timer = Timer::start(
            interval,
            Box::new(move || {
                registry.tick(Instant::now());
            }),
        )?;

        let displaced = self.timer_slot().replace(timer);
        if let Some(mut displaced) = displaced {
            displaced.stop();
        }
        Ok(())
    }

    /// Stop ticking; registered animators stay registered
    ///
    /// Called from inside a tick, that tick still completes and no further
    /// tick runs.
    pub fn stop_animation(&self) {
        let running = self.timer_slot().take();
        if let Some(mut running) = running {
            running.stop();
        }
    }

    /// Whether the timer thread is alive
    ///
    /// False after `stop_animation`, and also once a panicking getter or
    /// setter has ended the timer thread.
    pub fn is_running(&self) -> bool {
        self.timer_slot().as_ref().is_some_and(Timer::is_running)
    }

    fn timer_slot(&self) -> std::sync::MutexGuard<'_, Option<Timer>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Tick interval in milliseconds
    pub fn timeout(&self) -> u32 {
        self.timeout_ms.load(Ordering::Relaxed)
    }

    /// Set the tick interval; applies on the next `start_animation`
    pub fn set_timeout(&self, timeout_ms: u32) {
        self.timeout_ms.store(timeout_ms, Ordering::Relaxed);
    }

    /// Tick every registered animator now
    ///
    /// This is what the timer calls. Hosts with their own frame loop can
    /// call it directly instead of starting the timer. Ticks are serialized:
    /// a call made while the timer is mid-tick waits for that tick to end.
    /// Calling it from a getter or setter deadlocks.
    pub fn update_animators(&self) -> TickReport {
        self.update_animators_at(Instant::now())
    }

    /// Tick every registered animator at an explicit timestamp
    pub fn update_animators_at(&self, now: Instant) -> TickReport {
        self.registry.tick(now)
    }

    pub fn stats(&self) -> ManagerStats {
        ManagerStats {
            ticks: self.registry.ticks.load(Ordering::Relaxed),
            skipped: self.registry.skipped.load(Ordering::Relaxed),
        }
    }
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationManager {
    fn drop(&mut self) {
        self.stop_animation();
    }
}
