//! Demo animations on an in-memory window
//!
//! Stands in for a real toolkit window: the animators only ever see the
//! window through its position capability.

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use glide_animation::{
    Animate, AnimationManager, AnimatorGroup, AnimatorStep, Axis, EvaluationParameters, Position,
    Positioned, Property, StepParameters,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// A headless window with a position
#[derive(Debug, Default)]
pub struct DemoWindow {
    pub title: String,
    pub position: Position,
}

impl DemoWindow {
    pub fn new(title: &str, position: Position) -> Self {
        Self {
            title: title.to_string(),
            position,
        }
    }
}

impl Positioned for DemoWindow {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// Slide a window right and back using a step animator
pub fn run_step(manager: &AnimationManager, demo: &DemoConfig) -> Result<()> {
    let window = Arc::new(Mutex::new(DemoWindow::new("Step demo", Position::new(0, 10))));

    let step = AnimatorStep::new()
        .bound(Property::axis(&window, Axis::X))
        .step(StepParameters::ms(0, demo.distance, demo.duration_ms))
        .context("Invalid first step")?
        .step(StepParameters::ms(demo.distance, 0, demo.duration_ms))
        .context("Invalid second step")?;
    let step = Arc::new(Mutex::new(step));

    step.lock().map_err(|_| anyhow::anyhow!("animator lock poisoned"))?.start();
    manager.add_animator(step.clone());

    let result = play(manager, demo, &window, || {
        step.lock().map(|s| s.is_finished()).unwrap_or(true)
    });

    manager.delete_animator(&step);
    result
}

/// Move a window diagonally using a group animator on both axes
pub fn run_group(manager: &AnimationManager, demo: &DemoConfig) -> Result<()> {
    let window = Arc::new(Mutex::new(DemoWindow::new("Group demo", Position::new(0, 0))));

    let mut group = AnimatorGroup::new();
    group
        .add_animation(
            Property::axis(&window, Axis::X),
            EvaluationParameters::linear_ms(0, demo.distance, demo.duration_ms)?,
        )
        .context("Invalid x animation")?;
    group
        .add_animation(
            Property::axis(&window, Axis::Y),
            EvaluationParameters::linear_ms(0, demo.distance / 2, demo.duration_ms)?,
        )
        .context("Invalid y animation")?;
    let group = Arc::new(Mutex::new(group));

    group.lock().map_err(|_| anyhow::anyhow!("animator lock poisoned"))?.start();
    manager.add_animator(group.clone());

    let result = play(manager, demo, &window, || {
        group.lock().map(|g| g.is_finished()).unwrap_or(true)
    });

    manager.delete_animator(&group);
    result
}

/// Run the manager's timer and report the window until `finished` holds
fn play<F>(
    manager: &AnimationManager,
    demo: &DemoConfig,
    window: &Arc<Mutex<DemoWindow>>,
    finished: F,
) -> Result<()>
where
    F: Fn() -> bool,
{
    manager
        .start_animation()
        .context("Failed to start animation timer")?;

    let report_every = Duration::from_millis(demo.report_ms.max(1));
    let deadline = deadline_after(Instant::now(), demo.duration_ms);

    loop {
        thread::sleep(report_every);
        if let Ok(window) = window.lock() {
            info!(
                "{}: x={} y={}",
                window.title, window.position.x, window.position.y
            );
        }
        if finished() {
            break;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            manager.stop_animation();
            anyhow::bail!("Animation did not finish before the deadline");
        }
    }

    manager.stop_animation();
    let stats = manager.stats();
    info!("Done after {} ticks ({} skipped)", stats.ticks, stats.skipped);
    Ok(())
}

/// Generous upper bound in case the animation never completes
///
/// `None` when the bound is past what `Instant` can represent.
fn deadline_after(now: Instant, duration_ms: u64) -> Option<Instant> {
    let budget_ms = duration_ms.saturating_mul(4).saturating_add(1000);
    now.checked_add(Duration::from_millis(budget_ms))
}
