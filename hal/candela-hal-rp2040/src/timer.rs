//! One-shot timer on embassy-time
//!
//! `SignalTimer` is the handle the frame engine holds. Arm and disarm
//! requests are posted to a [`TimerChannel`]; a task running
//! [`TimerChannel::run`] waits out the duration and invokes the expiry
//! callback. `embassy_time::Timer` never completes early, which gives the
//! "no earlier than requested" guarantee; the time driver's tick rate
//! bounds the jitter.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use portable_atomic::{AtomicBool, Ordering};

use candela_hal::OneShotTimer;

/// Request to the timer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCommand {
    /// Start (or restart) a countdown in microseconds
    Arm(u32),
    /// Cancel without firing
    Disarm,
}

/// Shared state between [`SignalTimer`] and the timer service task
pub struct TimerChannel {
    command: Signal<CriticalSectionRawMutex, TimerCommand>,
    armed: AtomicBool,
}

impl Default for TimerChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerChannel {
    /// Create an idle channel, usable in a `static`
    pub const fn new() -> Self {
        Self {
            command: Signal::new(),
            armed: AtomicBool::new(false),
        }
    }

    /// Create a handle for the frame engine
    pub fn handle(&'static self) -> SignalTimer {
        SignalTimer { channel: self }
    }

    /// Service loop: wait for arm requests and call `on_expired` when a
    /// countdown runs out
    ///
    /// A new request while counting down replaces the current one.
    pub async fn run<F: FnMut()>(&self, mut on_expired: F) -> ! {
        let mut next = None;

        loop {
            let command = match next.take() {
                Some(command) => command,
                None => self.command.wait().await,
            };

            let TimerCommand::Arm(duration_us) = command else {
                continue;
            };

            match select(
                Timer::after_micros(duration_us as u64),
                self.command.wait(),
            )
            .await
            {
                Either::First(()) => {
                    self.armed.store(false, Ordering::Release);
                    on_expired();
                }
                Either::Second(replacement) => next = Some(replacement),
            }
        }
    }
}

/// Frame engine handle to a [`TimerChannel`]
pub struct SignalTimer {
    channel: &'static TimerChannel,
}

impl OneShotTimer for SignalTimer {
    fn arm(&mut self, duration_us: u32) {
        self.channel.armed.store(true, Ordering::Release);
        self.channel.command.signal(TimerCommand::Arm(duration_us));
    }

    fn disarm(&mut self) {
        if self.channel.armed.swap(false, Ordering::AcqRel) {
            self.channel.command.signal(TimerCommand::Disarm);
        }
    }

    fn is_armed(&self) -> bool {
        self.channel.armed.load(Ordering::Acquire)
    }
}
