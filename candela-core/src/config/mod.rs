//! Configuration types
//!
//! Board-agnostic configuration for frame timing and the fixture's
//! power-on state, plus a minimal no-alloc reader for `fixture.toml`.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
