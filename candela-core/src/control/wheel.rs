//! Color wheel generator
//!
//! Walks an 8-bit position around a three-segment hue wheel:
//! red -> green -> blue -> red.

use super::fixture::Rgb;

/// Free-running hue wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorWheel {
    position: u8,
    step: u8,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorWheel {
    /// Create a wheel at red that moves `step` positions per advance
    pub const fn new(step: u8) -> Self {
        Self { position: 0, step }
    }

    /// Current position (0-255)
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Move one step around the wheel
    pub fn advance(&mut self) -> Rgb {
        self.position = self.position.wrapping_add(self.step);
        self.color()
    }

    /// Color at the current position
    pub fn color(&self) -> Rgb {
        let pos = self.position;
        match pos {
            0..=84 => Rgb::new(255 - pos * 3, pos * 3, 0),
            85..=169 => {
                let p = pos - 85;
                Rgb::new(0, 255 - p * 3, p * 3)
            }
            _ => {
                let p = pos - 170;
                Rgb::new(p * 3, 0, 255 - p * 3)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_points() {
        let mut wheel = ColorWheel::new(85);
        assert_eq!(wheel.color(), Rgb::new(255, 0, 0));
        assert_eq!(wheel.advance(), Rgb::new(0, 255, 0));
        assert_eq!(wheel.advance(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_wraps_around() {
        let mut wheel = ColorWheel::new(1);
        for _ in 0..256 {
            wheel.advance();
        }
        assert_eq!(wheel.position(), 0);
    }

    #[test]
    fn test_every_position_is_valid() {
        let mut wheel = ColorWheel::new(1);
        for _ in 0..256 {
            let c = wheel.advance();
            // Components always sum to full scale
            let sum = c.red as u16 + c.green as u16 + c.blue as u16;
            assert_eq!(sum, 255, "{:?}", c);
        }
    }
}
