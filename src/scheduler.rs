//! Frame scheduling.
//!
//! The frame driver is a self-rescheduling loop: after each completed frame it
//! asks a [`FrameScheduler`] to hold off until the next activation is due. The
//! delay is always the nominal frame delay measured from the end of the
//! previous frame. Slow frames are never caught up or skipped, so under load
//! the animation runs slower than wall-clock time.

use std::time::Duration;

/// Something that can hold the driver until the next activation.
pub trait FrameScheduler {
    /// Returns once `delay` has passed (or immediately, for offline drivers).
    fn schedule_once(&mut self, delay: Duration);
}

/// Sleeps the current thread for the full delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedDelay;

impl FrameScheduler for FixedDelay {
    fn schedule_once(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Runs activations back to back. Used for offline rendering and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl FrameScheduler for NoDelay {
    fn schedule_once(&mut self, _delay: Duration) {}
}
