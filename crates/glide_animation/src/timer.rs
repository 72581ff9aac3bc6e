//! Background tick source
//!
//! A [`Timer`] owns one thread that calls a callback at a fixed interval
//! until it is stopped or dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Callback invoked on every timer firing
pub type TickCallback = Box<dyn FnMut() + Send>;

/// A running interval timer
pub struct Timer {
    interval: Duration,
    stop_flag: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl Timer {
    /// Spawn the timer thread
    ///
    /// A zero interval ticks as fast as possible, yielding between ticks.
    pub fn start(interval: Duration, mut callback: TickCallback) -> std::io::Result<Self> {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop_flag);

        let thread_handle = thread::Builder::new()
            .name("glide-animation-timer".into())
            .spawn(move || {
                while !thread_stop.load(Ordering::Relaxed) {
                    let start = Instant::now();

                    callback();

                    // Sleep for remaining interval
                    let elapsed = start.elapsed();
                    if elapsed < interval {
                        thread::sleep(interval - elapsed);
                    } else {
                        thread::yield_now();
                    }
                }
            })?;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "animation timer started");

        Ok(Self {
            interval,
            stop_flag,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the thread is still alive
    ///
    /// A callback that panics ends the thread without a `stop`.
    pub fn is_running(&self) -> bool {
        match &self.thread_handle {
            Some(handle) if handle.is_finished() => {
                if !self.stop_flag.load(Ordering::Relaxed) {
                    tracing::warn!("animation timer thread died without being stopped");
                }
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Stop the thread and wait for the tick in flight to finish
    ///
    /// Called from inside a tick, the thread is only flagged: it exits once
    /// the current callback returns.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        let Some(handle) = self.thread_handle.take() else {
            return;
        };

        if handle.thread().id() == thread::current().id() {
            tracing::debug!("animation timer stopped from its own tick");
            return;
        }

        // A panicking callback already ended the thread
        if handle.join().is_err() {
            tracing::warn!("animation timer thread panicked");
        }
        tracing::debug!("animation timer stopped");
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}
