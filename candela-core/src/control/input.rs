//! Operator input events

/// Input events from the front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Encoder rotated one detent clockwise
    EncoderCw,
    /// Encoder rotated one detent counter-clockwise
    EncoderCcw,
    /// Encoder button pressed (debounced)
    ButtonPress,
}

impl InputEvent {
    /// Signed encoder step, or 0 for non-rotation events
    pub fn delta(&self) -> i16 {
        match self {
            InputEvent::EncoderCw => 1,
            InputEvent::EncoderCcw => -1,
            InputEvent::ButtonPress => 0,
        }
    }
}
