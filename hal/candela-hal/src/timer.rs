//! Timing abstractions
//!
//! The frame engine needs two things from the platform's timers: a
//! one-shot countdown that raises a completion signal, and a monotonic
//! clock for coarse bookkeeping (watchdog, inter-frame gap).

/// Single-shot countdown timer
///
/// The completion signal is not part of this trait: the platform routes
/// it to the frame engine's `on_timer_expired` entry point.
pub trait OneShotTimer {
    /// Start a one-shot countdown of `duration_us` microseconds
    ///
    /// The completion signal must fire no earlier than the requested
    /// duration. Jitter after that point is implementation-defined but
    /// bounded. Arming an armed timer restarts the countdown.
    fn arm(&mut self, duration_us: u32);

    /// Stop the countdown without signaling
    ///
    /// Idempotent; safe to call when not armed.
    fn disarm(&mut self);

    /// Check if a countdown is pending
    fn is_armed(&self) -> bool;
}

/// Monotonic microsecond clock
pub trait MonotonicClock {
    /// Microseconds since an arbitrary fixed epoch
    ///
    /// Never decreases.
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `since_us`
    fn elapsed_us(&self, since_us: u64) -> u64 {
        self.now_us().saturating_sub(since_us)
    }
}

impl<T: OneShotTimer + ?Sized> OneShotTimer for &mut T {
    fn arm(&mut self, duration_us: u32) {
        (**self).arm(duration_us);
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }

    fn is_armed(&self) -> bool {
        (**self).is_armed()
    }
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
