//! Configuration type definitions
//!
//! Values here are loaded from the firmware's embedded `fixture.toml`.
//! Everything is checked by `validate()` before the engine sees it.

use crate::control::OperatorMode;
use crate::dmx::{
    data_time_us, MAX_BREAK_MARK_US, MAX_INTER_FRAME_GAP_US, MAX_START_ADDRESS,
    MAX_WATCHDOG_SLACK_US, MIN_ADDRESS, MIN_BREAK_US, MIN_MARK_US,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default allowance on top of the nominal frame before the watchdog fires
pub const DEFAULT_WATCHDOG_SLACK_US: u32 = 2_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Break shorter than 88us
    BreakTooShort(u32),
    /// Break longer than 1s
    BreakTooLong(u32),
    /// Mark-after-break shorter than 8us
    MarkTooShort(u32),
    /// Mark-after-break longer than 1s
    MarkTooLong(u32),
    /// Inter-frame idle longer than 1s
    GapTooLong(u32),
    /// Watchdog allowance longer than 1s
    SlackTooLong(u32),
    /// Start address outside 1..=510
    InvalidStartAddress(u16),
}

/// Frame timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Break duration (line low), microseconds
    pub break_us: u32,
    /// Mark-after-break duration (line high), microseconds
    pub mark_us: u32,
    /// Minimum idle between the end of one frame and the next break
    pub inter_frame_gap_us: u32,
    /// Extra time beyond the nominal frame before a frame counts as stalled
    pub watchdog_slack_us: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            break_us: MIN_BREAK_US,
            mark_us: MIN_MARK_US,
            inter_frame_gap_us: 0,
            watchdog_slack_us: DEFAULT_WATCHDOG_SLACK_US,
        }
    }
}

impl TimingConfig {
    /// Check protocol limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.break_us < MIN_BREAK_US {
            return Err(ConfigError::BreakTooShort(self.break_us));
        }
        if self.break_us > MAX_BREAK_MARK_US {
            return Err(ConfigError::BreakTooLong(self.break_us));
        }
        if self.mark_us < MIN_MARK_US {
            return Err(ConfigError::MarkTooShort(self.mark_us));
        }
        if self.mark_us > MAX_BREAK_MARK_US {
            return Err(ConfigError::MarkTooLong(self.mark_us));
        }
        if self.inter_frame_gap_us > MAX_INTER_FRAME_GAP_US {
            return Err(ConfigError::GapTooLong(self.inter_frame_gap_us));
        }
        if self.watchdog_slack_us > MAX_WATCHDOG_SLACK_US {
            return Err(ConfigError::SlackTooLong(self.watchdog_slack_us));
        }
        Ok(())
    }

    /// Break + mark + 513 slots, without any inter-frame idle
    pub fn nominal_frame_us(&self) -> u32 {
        self.break_us
            .saturating_add(self.mark_us)
            .saturating_add(data_time_us())
    }

    /// Longest a frame may spend outside `Idle` before the watchdog fires
    pub fn max_frame_period_us(&self) -> u32 {
        self.nominal_frame_us().saturating_add(self.watchdog_slack_us)
    }

    /// Break to break period when the host loop ticks as fast as it can
    pub fn frame_period_us(&self) -> u32 {
        self.nominal_frame_us()
            .saturating_add(self.inter_frame_gap_us)
    }
}

/// Fixture power-on configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FixtureConfig {
    /// Frame timing
    pub timing: TimingConfig,
    /// First channel of the RGB window (1..=510)
    pub start_address: u16,
    /// Initial red level
    pub red: u8,
    /// Initial green level
    pub green: u8,
    /// Initial blue level
    pub blue: u8,
    /// Operator mode at power-on
    pub mode: OperatorMode,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            start_address: MIN_ADDRESS,
            red: 0,
            green: 0,
            blue: 0,
            mode: OperatorMode::Program,
        }
    }
}

impl FixtureConfig {
    /// Check timing and addressing
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        if !(MIN_ADDRESS..=MAX_START_ADDRESS).contains(&self.start_address) {
            return Err(ConfigError::InvalidStartAddress(self.start_address));
        }
        Ok(())
    }
}
