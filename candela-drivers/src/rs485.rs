//! RS-485 transceiver direction control
//!
//! The fixture controller only transmits, so the DE/RE pin is put in
//! transmit mode once at startup and held there for as long as this
//! value lives.

use embedded_hal::digital::OutputPin;

/// Driver-enable pin of a half-duplex RS-485 transceiver
pub struct Rs485Direction<P> {
    pin: P,
    active_high: bool,
}

impl<P: OutputPin> Rs485Direction<P> {
    /// Take the pin and enable the transmitter
    pub fn new(pin: P, active_high: bool) -> Result<Self, P::Error> {
        let mut dir = Self { pin, active_high };
        dir.enable()?;
        Ok(dir)
    }

    /// Drive the line (DE asserted)
    fn enable(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.active_high.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockOutput;
    use core::cell::Cell;

    #[test]
    fn test_enables_transmit_on_init() {
        let level = Cell::new(false);
        let _dir = Rs485Direction::new(MockOutput(&level), true).unwrap();
        assert!(level.get());
    }

    #[test]
    fn test_active_low_driver_enable() {
        let level = Cell::new(true);
        let _dir = Rs485Direction::new(MockOutput(&level), false).unwrap();
        assert!(!level.get());
    }
}
