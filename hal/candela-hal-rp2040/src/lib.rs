//! RP2040-specific HAL for the DMX512 fixture controller
//!
//! Implements the `candela-hal` traits on embassy-rp:
//!
//! - [`clock::EmbassyClock`] - monotonic clock from `embassy_time`
//! - [`timer::SignalTimer`] - one-shot timer serviced by an async task
//! - [`line::Rp2040Line`] - break via the UART `BRK` bit, data via
//!   DMA-backed UART writes serviced by an async task
//!
//! The two async services run on the same thread executor as the driver
//! loop, so the timer and transmit completion contexts never preempt
//! each other.

#![no_std]

pub mod clock;
pub mod line;
pub mod timer;

pub use clock::EmbassyClock;
pub use line::{uart_config, Rp2040Line, TxChannel, UnsupportedFraming};
pub use timer::{SignalTimer, TimerChannel, TimerCommand};
