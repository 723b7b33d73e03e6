//! Events that advance the frame state machine

/// Events that can trigger frame state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameEvent {
    /// Driver loop asked for a new frame and the gap (if any) has passed
    Start,
    /// One-shot timer completion signal
    TimerExpired,
    /// Bulk transmit completion signal
    TransmitComplete,
}
