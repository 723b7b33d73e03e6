//! Transmit snapshot and the working/transmit buffer pair

use super::channel::ChannelBuffer;
use crate::dmx::{FRAME_LEN, START_CODE};

/// One complete frame as it goes on the wire
///
/// Byte 0 is the start code, bytes 1..=512 are channel values.
#[derive(Clone, PartialEq, Eq)]
pub struct TransmitBuffer {
    bytes: [u8; FRAME_LEN],
}

impl Default for TransmitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TransmitBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransmitBuffer")
            .field("start_code", &self.start_code())
            .finish_non_exhaustive()
    }
}

impl TransmitBuffer {
    /// Create an all-dark frame
    pub const fn new() -> Self {
        let mut bytes = [0; FRAME_LEN];
        bytes[0] = START_CODE;
        Self { bytes }
    }

    /// Overwrite this frame with a by-value copy of `channels`
    pub fn latch(&mut self, channels: &ChannelBuffer) {
        let (start, data) = self.bytes.split_at_mut(1);
        start[0] = START_CODE;
        channels.copy_into(data);
    }

    /// The full frame, start code first
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// The start code byte
    pub fn start_code(&self) -> u8 {
        self.bytes[0]
    }

    /// Channel value as latched, or `None` outside 1..=512
    pub fn channel(&self, address: u16) -> Option<u8> {
        match address {
            0 => None,
            a => self.bytes.get(a as usize).copied(),
        }
    }
}

/// Working buffer shared with the producer plus the engine-owned snapshot
///
/// The working side is borrowed; the transmit side is owned and only
/// changes inside [`FrameBuffers::latch`].
pub struct FrameBuffers<'a> {
    working: &'a ChannelBuffer,
    transmit: TransmitBuffer,
}

impl<'a> FrameBuffers<'a> {
    /// Pair a working buffer with a fresh dark snapshot
    pub fn new(working: &'a ChannelBuffer) -> Self {
        Self {
            working,
            transmit: TransmitBuffer::new(),
        }
    }

    /// Copy the working buffer into the snapshot
    pub fn latch(&mut self) {
        self.transmit.latch(self.working);
    }

    /// The producer-facing buffer
    pub fn working(&self) -> &'a ChannelBuffer {
        self.working
    }

    /// The snapshot of the current (or last) frame
    pub fn transmit(&self) -> &TransmitBuffer {
        &self.transmit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_dark() {
        let frame = TransmitBuffer::new();
        assert_eq!(frame.as_bytes().len(), 513);
        assert_eq!(frame.start_code(), START_CODE);
        assert!((1..=512).all(|address| frame.channel(address) == Some(0)));
    }

    #[test]
    fn test_new_frame_matches_dark_latch() {
        let mut latched = TransmitBuffer::new();
        latched.latch(&ChannelBuffer::new());
        assert_eq!(TransmitBuffer::new(), latched);
    }

    #[test]
    fn test_latch_copies_channels_after_start_code() {
        let channels = ChannelBuffer::new();
        channels.set(1, 255).unwrap();
        channels.set(512, 42).unwrap();

        let mut frame = TransmitBuffer::new();
        frame.latch(&channels);

        assert_eq!(frame.start_code(), START_CODE);
        assert_eq!(frame.as_bytes()[1], 255);
        assert_eq!(frame.as_bytes()[512], 42);
        assert_eq!(frame.channel(1), Some(255));
        assert_eq!(frame.channel(512), Some(42));
    }

    #[test]
    fn test_channel_out_of_range() {
        let frame = TransmitBuffer::new();
        assert_eq!(frame.channel(0), None);
        assert_eq!(frame.channel(513), None);
    }

    #[test]
    fn test_snapshot_is_by_value() {
        let channels = ChannelBuffer::new();
        let mut buffers = FrameBuffers::new(&channels);

        channels.set(3, 10).unwrap();
        buffers.latch();
        channels.set(3, 99).unwrap();

        assert_eq!(buffers.transmit().channel(3), Some(10));
        assert_eq!(buffers.working().get(3), Ok(99));
    }
}
