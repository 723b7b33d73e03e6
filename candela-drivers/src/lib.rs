//! Hardware driver implementations
//!
//! Board-independent drivers built on `embedded-hal` 1.0 pin traits:
//!
//! - Quadrature rotary encoder decoding
//! - Debounced push button
//! - RS-485 transceiver direction control

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod encoder;
pub mod rs485;

pub use button::DebouncedButton;
pub use encoder::QuadratureEncoder;
pub use rs485::Rs485Direction;
