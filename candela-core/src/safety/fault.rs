//! Fault records

use heapless::HistoryBuffer;

use crate::engine::{FrameEvent, FrameState};

/// Number of recent faults kept for inspection
pub const FAULT_LOG_LEN: usize = 8;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// A hardware completion signal arrived in a state not expecting it
    UnexpectedSignal(FrameEvent),
    /// The machine stayed outside `Idle` past the maximum frame period
    StalledFrame,
}

/// A recovered fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fault {
    /// What went wrong
    pub kind: FaultKind,
    /// State the machine was in when it was detected
    pub state: FrameState,
}

/// Monotonic count of recovered faults
///
/// Saturates instead of wrapping so the count never appears to go
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultCounter(u32);

impl FaultCounter {
    /// Create a zeroed counter
    pub const fn new() -> Self {
        Self(0)
    }

    /// Count one more fault
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Faults seen so far
    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Most recent faults, oldest first
pub struct FaultLog {
    recent: HistoryBuffer<Fault, FAULT_LOG_LEN>,
}

impl Default for FaultLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FaultLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            recent: HistoryBuffer::new(),
        }
    }

    /// Remember a fault, evicting the oldest when full
    pub fn record(&mut self, fault: Fault) {
        self.recent.write(fault);
    }

    /// Last recorded fault
    pub fn last(&self) -> Option<&Fault> {
        self.recent.recent()
    }

    /// Recorded faults, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Fault> {
        self.recent.oldest_ordered()
    }

    /// Number of faults currently held (at most [`FAULT_LOG_LEN`])
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.recent.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stalled(state: FrameState) -> Fault {
        Fault {
            kind: FaultKind::StalledFrame,
            state,
        }
    }

    #[test]
    fn test_counter_increments() {
        let mut counter = FaultCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = FaultCounter(u32::MAX);
        counter.increment();
        assert_eq!(counter.get(), u32::MAX);
    }

    #[test]
    fn test_log_keeps_latest() {
        let mut log = FaultLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);

        log.record(stalled(FrameState::Break));
        log.record(Fault {
            kind: FaultKind::UnexpectedSignal(FrameEvent::TransmitComplete),
            state: FrameState::Idle,
        });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.last().map(|f| f.kind),
            Some(FaultKind::UnexpectedSignal(FrameEvent::TransmitComplete))
        );
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = FaultLog::new();
        log.record(stalled(FrameState::Break));
        for _ in 0..FAULT_LOG_LEN {
            log.record(stalled(FrameState::Data));
        }

        assert_eq!(log.len(), FAULT_LOG_LEN);
        assert!(log.iter().all(|f| f.state == FrameState::Data));
    }
}
