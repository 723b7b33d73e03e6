//! Board-agnostic core logic for the DMX512 fixture controller
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - DMX512 protocol constants
//! - Channel buffer (producer side) and transmit snapshot
//! - Frame state machine driving the timer and line traits
//! - Watchdog and fault bookkeeping
//! - Timing and fixture configuration types
//! - Operator control model and color wheel

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod config;
pub mod control;
pub mod dmx;
pub mod engine;
pub mod safety;

#[cfg(test)]
pub(crate) mod testing;
