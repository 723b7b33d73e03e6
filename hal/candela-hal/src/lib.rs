//! Candela Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the DMX512 frame engine is
//! written against. Chip-specific crates implement them; host tests
//! implement them with simulated doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  candela-core (frame engine)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  candela-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ candela-hal-  │       │  simulated    │
//! │    rp2040     │       │  test doubles │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`timer::OneShotTimer`] - Microsecond single-shot countdown
//! - [`timer::MonotonicClock`] - Free-running microsecond clock
//! - [`line::LineDriver`] - DMX transmit line (raw level / UART / bulk send)

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use line::{LineDriver, LineLevel};
pub use timer::{MonotonicClock, OneShotTimer};
pub use uart::UartConfig;
