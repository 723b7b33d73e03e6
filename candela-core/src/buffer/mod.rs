//! Channel storage
//!
//! Two buffers separate the producer from the wire:
//!
//! - [`ChannelBuffer`]: the working copy, written by the operator UI at
//!   any time, one byte per channel.
//! - [`TransmitBuffer`]: the per-frame snapshot, owned by the frame
//!   engine and latched by value only between frames.

pub mod channel;
pub mod frame;

pub use channel::{clamp_level, BlendTarget, ChannelBuffer, ChannelError};
pub use frame::{FrameBuffers, TransmitBuffer};
