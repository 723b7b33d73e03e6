//! Fixture control state
//!
//! Holds the operator's settings (start address, RGB levels, mode) and
//! writes them into the channel buffer. The button toggles between
//! choosing a mode and adjusting the value that mode controls.

use super::input::InputEvent;
use super::mode::OperatorMode;
use super::wheel::ColorWheel;
use crate::buffer::{clamp_level, BlendTarget, ChannelBuffer, ChannelError};
use crate::config::FixtureConfig;
use crate::dmx::{MAX_START_ADDRESS, MIN_ADDRESS};

/// An RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Operator-facing fixture state
#[derive(Debug, Clone)]
pub struct FixtureControl {
    mode: OperatorMode,
    /// Encoder cycles modes instead of adjusting values
    selecting: bool,
    start_address: u16,
    color: Rgb,
    wheel: ColorWheel,
}

impl Default for FixtureControl {
    fn default() -> Self {
        Self::new(&FixtureConfig::default())
    }
}

impl FixtureControl {
    /// Create from the power-on configuration
    ///
    /// Starts in level-set phase. An out-of-range start address is
    /// clamped into 1..=510.
    pub fn new(config: &FixtureConfig) -> Self {
        Self {
            mode: config.mode,
            selecting: false,
            start_address: clamp_start_address(config.start_address as i32),
            color: Rgb::new(config.red, config.green, config.blue),
            wheel: ColorWheel::default(),
        }
    }

    /// Apply one input event
    ///
    /// Returns true if the channel output changed and [`load`](Self::load)
    /// should be called.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if event == InputEvent::ButtonPress {
            self.selecting = !self.selecting;
            // Leaving mode-select applies the newly chosen mode
            return !self.selecting;
        }

        let delta = event.delta();

        if self.selecting {
            self.mode = if delta > 0 {
                self.mode.next()
            } else {
                self.mode.prev()
            };
            return false;
        }

        match self.mode {
            OperatorMode::Program => {
                self.start_address = clamp_start_address(self.start_address as i32 + delta as i32);
            }
            OperatorMode::Red => self.color.red = bump(self.color.red, delta),
            OperatorMode::Green => self.color.green = bump(self.color.green, delta),
            OperatorMode::Blue => self.color.blue = bump(self.color.blue, delta),
            OperatorMode::Intensity | OperatorMode::All => {
                self.color.red = bump(self.color.red, delta);
                self.color.green = bump(self.color.green, delta);
                self.color.blue = bump(self.color.blue, delta);
            }
            OperatorMode::Wheel => return false,
        }

        true
    }

    /// Step the color wheel if it is running
    ///
    /// Returns true if the output changed.
    pub fn advance_wheel(&mut self) -> bool {
        if self.mode != OperatorMode::Wheel || self.selecting {
            return false;
        }
        self.wheel.advance();
        true
    }

    /// Write the current settings into the channel buffer
    pub fn load(&self, channels: &ChannelBuffer) -> Result<(), ChannelError> {
        let Rgb { red, green, blue } = self.color;

        match self.mode {
            OperatorMode::Program => {
                channels.set_all(0);
                self.write_window(channels, self.color)
            }
            OperatorMode::Red | OperatorMode::Green | OperatorMode::Blue => {
                self.write_window(channels, self.color)
            }
            OperatorMode::Intensity => channels
                .blend_rgb(
                    red.into(),
                    green.into(),
                    blue.into(),
                    BlendTarget::Channel(self.start_address),
                )
                .map(|_| ()),
            OperatorMode::All => channels
                .blend_rgb(red.into(), green.into(), blue.into(), BlendTarget::All)
                .map(|_| ()),
            OperatorMode::Wheel => self.write_window(channels, self.wheel.color()),
        }
    }

    fn write_window(&self, channels: &ChannelBuffer, color: Rgb) -> Result<(), ChannelError> {
        channels.set(self.start_address, color.red.into())?;
        channels.set(self.start_address + 1, color.green.into())?;
        channels.set(self.start_address + 2, color.blue.into())
    }

    /// Current mode
    pub fn mode(&self) -> OperatorMode {
        self.mode
    }

    /// Check if the encoder is currently choosing a mode
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// First channel of the RGB window
    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    /// Operator RGB levels
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Value to show next to the mode label
    pub fn display_value(&self) -> u16 {
        match self.mode {
            OperatorMode::Program => self.start_address,
            OperatorMode::Red => self.color.red.into(),
            OperatorMode::Green => self.color.green.into(),
            OperatorMode::Blue => self.color.blue.into(),
            OperatorMode::Intensity | OperatorMode::All => {
                let Rgb { red, green, blue } = self.color;
                (red as u16 + green as u16 + blue as u16) / 3
            }
            OperatorMode::Wheel => self.wheel.position().into(),
        }
    }
}

/// Clamp a start address to the bound it overflowed
fn clamp_start_address(address: i32) -> u16 {
    address.clamp(MIN_ADDRESS as i32, MAX_START_ADDRESS as i32) as u16
}

fn bump(level: u8, delta: i16) -> u8 {
    clamp_level(level as i32 + delta as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(mode: OperatorMode) -> FixtureControl {
        FixtureControl::new(&FixtureConfig {
            mode,
            start_address: 10,
            ..Default::default()
        })
    }

    #[test]
    fn test_button_toggles_phase() {
        let mut ctl = control(OperatorMode::Red);
        assert!(!ctl.is_selecting());
        assert!(!ctl.handle(InputEvent::ButtonPress));
        assert!(ctl.is_selecting());
        assert!(ctl.handle(InputEvent::ButtonPress));
        assert!(!ctl.is_selecting());
    }

    #[test]
    fn test_encoder_selects_mode() {
        let mut ctl = control(OperatorMode::Program);
        ctl.handle(InputEvent::ButtonPress);
        ctl.handle(InputEvent::EncoderCw);
        assert_eq!(ctl.mode(), OperatorMode::Red);
        ctl.handle(InputEvent::EncoderCcw);
        ctl.handle(InputEvent::EncoderCcw);
        assert_eq!(ctl.mode(), OperatorMode::Wheel);
    }

    #[test]
    fn test_color_clamps() {
        let mut ctl = control(OperatorMode::Red);
        ctl.handle(InputEvent::EncoderCcw);
        assert_eq!(ctl.color().red, 0);

        for _ in 0..300 {
            ctl.handle(InputEvent::EncoderCw);
        }
        assert_eq!(ctl.color().red, 255);
        assert_eq!(ctl.color().green, 0);
    }

    #[test]
    fn test_address_clamps_to_bounds() {
        let mut ctl = control(OperatorMode::Program);
        for _ in 0..20 {
            ctl.handle(InputEvent::EncoderCcw);
        }
        assert_eq!(ctl.start_address(), 1);

        for _ in 0..600 {
            ctl.handle(InputEvent::EncoderCw);
        }
        assert_eq!(ctl.start_address(), 510);
    }

    #[test]
    fn test_config_address_clamped() {
        let ctl = FixtureControl::new(&FixtureConfig {
            start_address: 600,
            ..Default::default()
        });
        assert_eq!(ctl.start_address(), 510);
    }

    #[test]
    fn test_intensity_moves_all_colors() {
        let mut ctl = control(OperatorMode::Intensity);
        ctl.handle(InputEvent::EncoderCw);
        ctl.handle(InputEvent::EncoderCw);
        assert_eq!(ctl.color(), Rgb::new(2, 2, 2));
    }

    #[test]
    fn test_load_rgb_window() {
        let channels = ChannelBuffer::new();
        let ctl = FixtureControl::new(&FixtureConfig {
            mode: OperatorMode::Green,
            start_address: 510,
            red: 1,
            green: 2,
            blue: 3,
            ..Default::default()
        });
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(510), Ok(1));
        assert_eq!(channels.get(511), Ok(2));
        assert_eq!(channels.get(512), Ok(3));
    }

    #[test]
    fn test_load_program_clears_old_window() {
        let channels = ChannelBuffer::new();
        let mut ctl = FixtureControl::new(&FixtureConfig {
            mode: OperatorMode::Program,
            start_address: 10,
            red: 50,
            ..Default::default()
        });
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(10), Ok(50));

        ctl.handle(InputEvent::EncoderCw);
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(10), Ok(0));
        assert_eq!(channels.get(11), Ok(50));
    }

    #[test]
    fn test_load_intensity_single_channel() {
        let channels = ChannelBuffer::new();
        let ctl = FixtureControl::new(&FixtureConfig {
            mode: OperatorMode::Intensity,
            start_address: 7,
            red: 30,
            green: 60,
            blue: 91,
            ..Default::default()
        });
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(7), Ok(60));
        assert_eq!(channels.get(8), Ok(0));
    }

    #[test]
    fn test_load_all_broadcasts() {
        let channels = ChannelBuffer::new();
        let ctl = FixtureControl::new(&FixtureConfig {
            mode: OperatorMode::All,
            red: 90,
            green: 90,
            blue: 90,
            ..Default::default()
        });
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(1), Ok(90));
        assert_eq!(channels.get(512), Ok(90));
    }

    #[test]
    fn test_wheel_advances_only_in_wheel_mode() {
        let mut ctl = control(OperatorMode::Red);
        assert!(!ctl.advance_wheel());

        let mut ctl = control(OperatorMode::Wheel);
        assert!(ctl.advance_wheel());
        assert_eq!(ctl.display_value(), 1);

        ctl.handle(InputEvent::ButtonPress);
        assert!(!ctl.advance_wheel());
    }

    #[test]
    fn test_load_wheel_color() {
        let channels = ChannelBuffer::new();
        let ctl = control(OperatorMode::Wheel);
        ctl.load(&channels).unwrap();
        assert_eq!(channels.get(10), Ok(255));
        assert_eq!(channels.get(11), Ok(0));
        assert_eq!(channels.get(12), Ok(0));
    }

    #[test]
    fn test_encoder_ignored_in_wheel_mode() {
        let mut ctl = control(OperatorMode::Wheel);
        assert!(!ctl.handle(InputEvent::EncoderCw));
    }
}
