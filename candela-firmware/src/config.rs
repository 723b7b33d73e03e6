//! Fixture configuration
//!
//! `fixture.toml` is compiled into the image and read once at boot.
//! build.rs rejects a file that does not validate.

use defmt::*;

use candela_core::config::{parse_config, FixtureConfig};

/// Embedded configuration (compiled into firmware)
/// Edit fixture.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../fixture.toml");

/// Read the embedded configuration, falling back to defaults
pub fn load() -> FixtureConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: start address {}, mode {}, break {}us, mark {}us, gap {}us",
                config.start_address,
                config.mode.label(),
                config.timing.break_us,
                config.timing.mark_us,
                config.timing.inter_frame_gap_us
            );
            config
        }
        Err(e) => {
            warn!("fixture.toml rejected ({}), using defaults", e);
            FixtureConfig::default()
        }
    }
}
