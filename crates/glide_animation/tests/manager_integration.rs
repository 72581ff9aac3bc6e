//! Integration tests for the animation manager driving every animator kind
//!
//! These tests verify that:
//! - A single animator reaches its end value through manager ticks
//! - Step animators chain their segments under the manager
//! - Group entries land on their end values together
//! - Deregistering one animator leaves the others untouched

use glide_animation::{
    Animate, AnimationManager, Animator, AnimatorGroup, AnimatorStep, Axis, EvaluationParameters,
    Position, Positioned, Property, SharedAnimator, StepParameters,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct Window {
    position: Position,
}

impl Positioned for Window {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// One animator on an in-memory cell, ticked at 0ms, 500ms and past the end
#[test]
fn test_single_animator_end_to_end() {
    let manager = AnimationManager::new();
    let cell = Arc::new(Mutex::new(0i32));

    let mut animator = Animator::new().bound(Property::shared(cell.clone()));
    animator.set_start_value(0);
    animator.set_end_value(500);
    animator.set_duration_ms(1000).unwrap();
    let animator = Arc::new(Mutex::new(animator));
    manager.add_animator(animator.clone());

    let t0 = Instant::now();
    animator.lock().unwrap().start_at(t0);
    assert!(!animator.lock().unwrap().is_finished());

    manager.update_animators_at(t0);
    assert_eq!(*cell.lock().unwrap(), 0);

    manager.update_animators_at(t0 + ms(500));
    assert_eq!(*cell.lock().unwrap(), 250);
    assert!(!animator.lock().unwrap().is_finished());

    let report = manager.update_animators_at(t0 + ms(1001));
    assert_eq!(report.finished, 1);
    assert_eq!(*cell.lock().unwrap(), 500);
    assert!(animator.lock().unwrap().is_finished());
}

/// Step animator moving a window right and back under manager ticks
#[test]
fn test_step_animator_through_manager() {
    let manager = AnimationManager::new();
    let window = Arc::new(Mutex::new(Window {
        position: Position::new(0, 40),
    }));

    let step = AnimatorStep::new()
        .bound(Property::axis(&window, Axis::X))
        .step(StepParameters::ms(0, 500, 1000))
        .unwrap()
        .step(StepParameters::ms(500, 0, 1000))
        .unwrap();
    let step = Arc::new(Mutex::new(step));
    manager.add_animator(step.clone());

    let t0 = Instant::now();
    step.lock().unwrap().start_at(t0);

    manager.update_animators_at(t0 + ms(1500));
    {
        let step = step.lock().unwrap();
        assert_eq!(step.current_step(), 1);
        assert_eq!(step.current_params().start_value, 500);
        assert!(!step.is_finished());
    }
    assert_eq!(window.lock().unwrap().position, Position::new(500, 40));

    manager.update_animators_at(t0 + ms(2000));
    assert!(!step.lock().unwrap().is_finished());

    manager.update_animators_at(t0 + ms(2500));
    assert!(step.lock().unwrap().is_finished());
    assert_eq!(window.lock().unwrap().position, Position::new(0, 40));
}

/// Group entries with different end values finish on the same tick
#[test]
fn test_group_lockstep_independent_of_order() {
    for reversed in [false, true] {
        let manager = AnimationManager::new();
        let near = Arc::new(Mutex::new(0i32));
        let far = Arc::new(Mutex::new(0i32));

        let mut cells = vec![(near.clone(), 10), (far.clone(), 1000)];
        if reversed {
            cells.reverse();
        }

        let mut group = AnimatorGroup::new();
        for (cell, end) in cells {
            group
                .add_animation(
                    Property::shared(cell),
                    EvaluationParameters::linear_ms(0, end, 800).unwrap(),
                )
                .unwrap();
        }
        let group = Arc::new(Mutex::new(group));
        manager.add_animator(group.clone());

        let t0 = Instant::now();
        group.lock().unwrap().start_at(t0);

        manager.update_animators_at(t0 + ms(799));
        assert_ne!(*near.lock().unwrap(), 10);
        assert_ne!(*far.lock().unwrap(), 1000);

        manager.update_animators_at(t0 + ms(800));
        assert_eq!(*near.lock().unwrap(), 10);
        assert_eq!(*far.lock().unwrap(), 1000);
        assert!(group.lock().unwrap().is_finished());
    }
}

/// Removing one animator does not change how another is ticked
#[test]
fn test_registry_isolation() {
    let manager = AnimationManager::new();
    let a_cell = Arc::new(Mutex::new(0i32));
    let b_cell = Arc::new(Mutex::new(0i32));
    let t0 = Instant::now();

    let make = |cell: &Arc<Mutex<i32>>| {
        let mut animator = Animator::new().bound(Property::shared(cell.clone()));
        animator.set_end_value(100);
        animator.set_duration_ms(100).unwrap();
        animator.start_at(t0);
        Arc::new(Mutex::new(animator))
    };
    let a = make(&a_cell);
    let b = make(&b_cell);
    manager.add_animator(a.clone());
    manager.add_animator(b.clone());

    manager.update_animators_at(t0 + ms(25));
    assert_eq!(*a_cell.lock().unwrap(), 25);
    assert_eq!(*b_cell.lock().unwrap(), 25);

    assert!(manager.delete_animator(&a));
    manager.update_animators_at(t0 + ms(50));
    assert_eq!(*a_cell.lock().unwrap(), 25);
    assert_eq!(*b_cell.lock().unwrap(), 50);

    manager.update_animators_at(t0 + ms(100));
    assert_eq!(*b_cell.lock().unwrap(), 100);
    assert!(b.lock().unwrap().is_finished());
}

/// Unbound animators are skipped and counted, never written
#[test]
fn test_unbound_animator_is_counted_not_run() {
    let manager = AnimationManager::new();
    let mut unbound = Animator::<i32>::new();
    unbound.set_end_value(9);
    unbound.set_duration_ms(10).unwrap();
    let t0 = Instant::now();
    unbound.start_at(t0);
    let unbound = Arc::new(Mutex::new(unbound));
    manager.add_animator(unbound.clone());

    let report = manager.update_animators_at(t0 + ms(20));
    assert_eq!(report.skipped, 1);
    assert_eq!(manager.stats().skipped, 1);
    assert!(!unbound.lock().unwrap().is_finished());
}

/// Registration changes made from inside a tick apply on the next tick
#[test]
fn test_registration_during_tick() {
    let manager = Arc::new(AnimationManager::new());
    let late_cell = Arc::new(Mutex::new(0i32));
    let t0 = Instant::now();

    let mut late = Animator::new().bound(Property::shared(late_cell.clone()));
    late.set_end_value(10);
    late.set_duration_ms(10).unwrap();
    late.start_at(t0);
    let late: SharedAnimator = Arc::new(Mutex::new(late));

    let registrar = {
        let manager = Arc::clone(&manager);
        let late = Mutex::new(Some(late));
        Property::new(
            || 0,
            move |_: i32| {
                if let Some(animator) = late.lock().unwrap().take() {
                    manager.add_animator(animator);
                }
            },
        )
    };
    let mut trigger = Animator::new().bound(registrar);
    trigger.set_end_value(1);
    trigger.set_duration_ms(10).unwrap();
    trigger.start_at(t0);
    manager.add_animator(Arc::new(Mutex::new(trigger)));

    let first = manager.update_animators_at(t0 + ms(5));
    assert_eq!(first.total(), 1);
    assert_eq!(manager.animator_count(), 2);
    assert_eq!(*late_cell.lock().unwrap(), 0);

    let second = manager.update_animators_at(t0 + ms(10));
    assert_eq!(second.total(), 2);
    assert_eq!(*late_cell.lock().unwrap(), 10);
}
