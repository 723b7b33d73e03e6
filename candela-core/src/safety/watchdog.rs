//! Stalled-frame watchdog
//!
//! Arms when the machine leaves `Idle` and is checked from `tick()`. A
//! frame that has not completed within the maximum frame period is
//! reported as stalled so the engine can reset.

/// Watchdog check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogStatus {
    /// No frame in flight
    Idle,
    /// Frame in flight and within its budget
    Ok,
    /// Frame in flight past its budget
    Stalled,
}

/// Dead-man timer for an in-flight frame
#[derive(Debug, Clone)]
pub struct FrameWatchdog {
    /// Budget for one frame (us)
    timeout_us: u32,
    /// When the current frame left `Idle` (us)
    started_at_us: Option<u64>,
}

impl FrameWatchdog {
    /// Create a disarmed watchdog with the given budget
    pub fn new(timeout_us: u32) -> Self {
        Self {
            timeout_us,
            started_at_us: None,
        }
    }

    /// Change the budget; applies to the frame in flight too
    pub fn set_timeout(&mut self, timeout_us: u32) {
        self.timeout_us = timeout_us;
    }

    /// Start timing a frame
    pub fn start(&mut self, now_us: u64) {
        self.started_at_us = Some(now_us);
    }

    /// Stop timing
    pub fn clear(&mut self) {
        self.started_at_us = None;
    }

    /// Check the frame in flight against the budget
    pub fn check(&self, now_us: u64) -> WatchdogStatus {
        match self.started_at_us {
            None => WatchdogStatus::Idle,
            Some(start) if now_us.saturating_sub(start) > self.timeout_us as u64 => {
                WatchdogStatus::Stalled
            }
            Some(_) => WatchdogStatus::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let dog = FrameWatchdog::new(1_000);
        assert_eq!(dog.check(1_000_000), WatchdogStatus::Idle);
    }

    #[test]
    fn test_within_budget() {
        let mut dog = FrameWatchdog::new(1_000);
        dog.start(5_000);
        assert_eq!(dog.check(5_000), WatchdogStatus::Ok);
        assert_eq!(dog.check(6_000), WatchdogStatus::Ok);
    }

    #[test]
    fn test_stalled_past_budget() {
        let mut dog = FrameWatchdog::new(1_000);
        dog.start(5_000);
        assert_eq!(dog.check(6_001), WatchdogStatus::Stalled);
    }

    #[test]
    fn test_clear() {
        let mut dog = FrameWatchdog::new(1_000);
        dog.start(0);
        dog.clear();
        assert_eq!(dog.check(10_000), WatchdogStatus::Idle);
    }

    #[test]
    fn test_clock_going_backwards_is_not_a_stall() {
        let mut dog = FrameWatchdog::new(1_000);
        dog.start(5_000);
        assert_eq!(dog.check(4_000), WatchdogStatus::Ok);
    }
}
