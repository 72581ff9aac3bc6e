//! Glide Animation Engine
//!
//! Time-based animation of widget properties, driven by one shared timer.
//!
//! # Features
//!
//! - **Evaluator**: Pure curve function from elapsed time to value, clamped so
//!   it lands exactly on the end value
//! - **Animator**: One property from a start value to an end value
//! - **AnimatorStep**: Chained segments played back to back on one property
//! - **AnimatorGroup**: Many properties moved in lockstep from one start time
//! - **AnimationManager**: Registry plus timer, ticking every animator
//!
//! # Example
//!
//! ```rust
//! use glide_animation::{Animate, AnimationManager, Animator, Property};
//! use std::sync::{Arc, Mutex};
//! use std::time::{Duration, Instant};
//!
//! let manager = AnimationManager::new();
//! let x = Arc::new(Mutex::new(0i32));
//!
//! let mut animator = Animator::new().bound(Property::shared(x.clone()));
//! animator.set_end_value(500);
//! animator.set_duration_ms(1000).unwrap();
//!
//! let t0 = Instant::now();
//! animator.start_at(t0);
//! manager.add_animator(Arc::new(Mutex::new(animator)));
//!
//! manager.update_animators_at(t0 + Duration::from_millis(500));
//! assert_eq!(*x.lock().unwrap(), 250);
//! ```

pub mod animator;
pub mod config;
pub mod curve;
pub mod error;
pub mod evaluator;
pub mod group;
pub mod manager;
pub mod property;
pub mod step;
pub mod timer;
pub mod values;

pub use animator::{Animate, Animator, SharedAnimator, SkipReason, TickOutcome};
pub use config::ManagerConfig;
pub use curve::Curve;
pub use error::{AnimationError, Result};
pub use evaluator::{EvaluationParameters, Evaluator};
pub use group::{AnimatorGroup, GroupEntryId};
pub use manager::{AnimationManager, ManagerStats, TickReport};
pub use property::{Axis, Getter, Position, Positioned, Property, Setter};
pub use step::{AnimatorStep, StepParameters};
pub use timer::{TickCallback, Timer};
pub use values::Interpolate;
