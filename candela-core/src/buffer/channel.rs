//! Working channel buffer
//!
//! Each channel is an independent byte. Writes are single-byte stores and
//! the frame engine's snapshot is a byte-granular copy, so a snapshot can
//! never observe a torn value. There is no cross-channel invariant to
//! protect, which is what lets the producer and the engine share this
//! buffer without a lock.

use portable_atomic::{AtomicU8, Ordering};

use crate::dmx::{CHANNEL_COUNT, MAX_ADDRESS, MIN_ADDRESS};

/// Errors from producer-side channel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Channel address outside 1..=512
    InvalidAddress(u16),
}

/// Where `blend_rgb` writes its intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendTarget {
    /// A single channel address
    Channel(u16),
    /// Every channel in the universe
    All,
}

/// Clamp an arbitrary level into the 8-bit channel range
pub fn clamp_level(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

#[allow(clippy::declare_interior_mutable_const)]
const DARK: AtomicU8 = AtomicU8::new(0);

/// Working copy of the universe, indexed by channel address 1..=512
///
/// All methods take `&self` so a single `static` can be shared between
/// the producer and the frame engine.
pub struct ChannelBuffer {
    slots: [AtomicU8; CHANNEL_COUNT],
}

impl Default for ChannelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBuffer {
    /// Create a buffer with every channel at zero
    pub const fn new() -> Self {
        Self {
            slots: [DARK; CHANNEL_COUNT],
        }
    }

    fn index(address: u16) -> Result<usize, ChannelError> {
        if (MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            Ok((address - MIN_ADDRESS) as usize)
        } else {
            Err(ChannelError::InvalidAddress(address))
        }
    }

    /// Set one channel
    ///
    /// `value` is clamped to 0..=255. An address outside 1..=512 is
    /// rejected and the buffer is left unchanged.
    pub fn set(&self, address: u16, value: i32) -> Result<(), ChannelError> {
        let index = Self::index(address)?;
        self.slots[index].store(clamp_level(value), Ordering::Relaxed);
        Ok(())
    }

    /// Read one channel
    pub fn get(&self, address: u16) -> Result<u8, ChannelError> {
        let index = Self::index(address)?;
        Ok(self.slots[index].load(Ordering::Relaxed))
    }

    /// Set every channel to the same (clamped) value
    pub fn set_all(&self, value: i32) {
        let level = clamp_level(value);
        for slot in &self.slots {
            slot.store(level, Ordering::Relaxed);
        }
    }

    /// Write the average of an RGB triple as a single intensity
    ///
    /// Each component is clamped first, then averaged with truncating
    /// integer division. Returns the intensity written.
    pub fn blend_rgb(
        &self,
        red: i32,
        green: i32,
        blue: i32,
        target: BlendTarget,
    ) -> Result<u8, ChannelError> {
        let sum = clamp_level(red) as u16 + clamp_level(green) as u16 + clamp_level(blue) as u16;
        let intensity = (sum / 3) as u8;

        match target {
            BlendTarget::Channel(address) => self.set(address, intensity.into())?,
            BlendTarget::All => self.set_all(intensity.into()),
        }

        Ok(intensity)
    }

    /// Copy channels, in address order starting at 1, into `out`
    ///
    /// Copies `min(out.len(), 512)` channels.
    pub fn copy_into(&self, out: &mut [u8]) {
        for (dst, slot) in out.iter_mut().zip(self.slots.iter()) {
            *dst = slot.load(Ordering::Relaxed);
        }
    }
}
