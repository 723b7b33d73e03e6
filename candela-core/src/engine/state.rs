//! Frame state definition

use super::events::FrameEvent;

/// Frame states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// Between frames; the only state in which a snapshot is taken
    #[default]
    Idle,
    /// Line held low, waiting out the break
    Break,
    /// Line held high, waiting out the mark-after-break
    Mark,
    /// UART sending the 513-byte frame
    Data,
}

impl FrameState {
    /// Check if a frame is in flight (a new one cannot start)
    pub fn is_busy(&self) -> bool {
        self.transition(FrameEvent::Start).is_none()
    }

    /// Process an event and return the next state
    ///
    /// Returns `None` for any pair that is not part of the frame cycle;
    /// the caller treats that as a fault.
    pub fn transition(self, event: FrameEvent) -> Option<Self> {
        use FrameEvent::*;
        use FrameState::*;

        match (self, event) {
            (Idle, Start) => Some(Break),
            (Break, TimerExpired) => Some(Mark),
            (Mark, TimerExpired) => Some(Data),
            (Data, TransmitComplete) => Some(Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [FrameState; 4] = [
        FrameState::Idle,
        FrameState::Break,
        FrameState::Mark,
        FrameState::Data,
    ];

    const EVENTS: [FrameEvent; 3] = [
        FrameEvent::Start,
        FrameEvent::TimerExpired,
        FrameEvent::TransmitComplete,
    ];

    #[test]
    fn test_full_cycle() {
        let state = FrameState::Idle;
        let state = state.transition(FrameEvent::Start).unwrap();
        assert_eq!(state, FrameState::Break);
        let state = state.transition(FrameEvent::TimerExpired).unwrap();
        assert_eq!(state, FrameState::Mark);
        let state = state.transition(FrameEvent::TimerExpired).unwrap();
        assert_eq!(state, FrameState::Data);
        let state = state.transition(FrameEvent::TransmitComplete).unwrap();
        assert_eq!(state, FrameState::Idle);
    }

    #[test]
    fn test_exactly_one_valid_event_per_state() {
        for state in STATES {
            let valid = EVENTS
                .iter()
                .filter(|&&event| state.transition(event).is_some())
                .count();
            assert_eq!(valid, 1, "{:?}", state);
        }
    }

    #[test]
    fn test_unexpected_signals_are_rejected() {
        assert_eq!(FrameState::Idle.transition(FrameEvent::TimerExpired), None);
        assert_eq!(FrameState::Idle.transition(FrameEvent::TransmitComplete), None);
        assert_eq!(FrameState::Break.transition(FrameEvent::TransmitComplete), None);
        assert_eq!(FrameState::Mark.transition(FrameEvent::TransmitComplete), None);
        assert_eq!(FrameState::Data.transition(FrameEvent::TimerExpired), None);
        assert_eq!(FrameState::Data.transition(FrameEvent::Start), None);
    }

    #[test]
    fn test_busy() {
        assert!(!FrameState::Idle.is_busy());
        assert!(FrameState::Break.is_busy());
        assert!(FrameState::Mark.is_busy());
        assert!(FrameState::Data.is_busy());
    }
}
