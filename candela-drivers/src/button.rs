//! Debounced push button
//!
//! A falling edge starts a hold-off. When the hold-off expires the pin
//! is sampled again and a press is reported only if it is still low.
//! Edges during the hold-off are ignored.

use embedded_hal::digital::InputPin;

/// Hold-off after a falling edge
pub const DEBOUNCE_MS: u32 = 50;

/// Active-low push button with polled debounce
pub struct DebouncedButton<P> {
    pin: P,
    holdoff_ticks: u32,
    /// Polls left in the current hold-off, 0 when armed
    remaining: u32,
    was_high: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a button polled every `poll_interval_ms`
    pub fn new(pin: P, poll_interval_ms: u32) -> Self {
        let holdoff_ticks = (DEBOUNCE_MS / poll_interval_ms.max(1)).max(1);
        Self {
            pin,
            holdoff_ticks,
            remaining: 0,
            was_high: true,
        }
    }

    /// Sample the pin; returns true once per debounced press
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        let high = self.pin.is_high()?;

        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.was_high = high;
                return Ok(!high);
            }
            return Ok(false);
        }

        if self.was_high && !high {
            self.remaining = self.holdoff_ticks;
        }
        self.was_high = high;

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;
    use core::cell::Cell;

    #[test]
    fn test_press_reported_after_holdoff() {
        let level = Cell::new(true);
        let mut button = DebouncedButton::new(MockInput(&level), 10);

        level.set(false);
        let presses = (0..10).filter(|_| button.poll().unwrap()).count();
        assert_eq!(presses, 1);
    }

    #[test]
    fn test_glitch_is_ignored() {
        let level = Cell::new(true);
        let mut button = DebouncedButton::new(MockInput(&level), 10);

        level.set(false);
        assert!(!button.poll().unwrap());
        level.set(true);
        for _ in 0..10 {
            assert!(!button.poll().unwrap());
        }
    }

    #[test]
    fn test_held_button_does_not_repeat() {
        let level = Cell::new(true);
        let mut button = DebouncedButton::new(MockInput(&level), 10);

        level.set(false);
        let presses = (0..100).filter(|_| button.poll().unwrap()).count();
        assert_eq!(presses, 1);

        level.set(true);
        button.poll().unwrap();
        level.set(false);
        let presses = (0..10).filter(|_| button.poll().unwrap()).count();
        assert_eq!(presses, 1);
    }
}
