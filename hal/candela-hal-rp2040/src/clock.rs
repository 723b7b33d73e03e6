//! Monotonic clock backed by the embassy time driver

use candela_hal::MonotonicClock;
use embassy_time::Instant;

/// `MonotonicClock` on `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
