//! UART framing configuration

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// DMX512 framing: 250 kbaud, 8 data bits, no parity, 2 stop bits
    pub const fn dmx512() -> Self {
        Self {
            baudrate: 250_000,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::Two,
        }
    }

    /// Bits on the wire per character, including the start bit
    pub const fn bits_per_char(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Time on the wire for `chars` back-to-back characters, rounded up
    pub const fn transfer_time_us(&self, chars: u32) -> u32 {
        let bits = chars as u64 * self.bits_per_char() as u64;
        let us = (bits * 1_000_000).div_ceil(self.baudrate as u64);
        us as u32
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::dmx512()
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dmx512_framing() {
        let cfg = UartConfig::dmx512();
        assert_eq!(cfg.baudrate, 250_000);
        assert_eq!(cfg.stop_bits, StopBits::Two);
        assert_eq!(cfg.bits_per_char(), 11);
    }

    #[test]
    fn test_full_frame_transfer_time() {
        // 513 slots * 11 bits * 4us
        assert_eq!(UartConfig::dmx512().transfer_time_us(513), 22_572);
    }

    #[test]
    fn test_transfer_time_rounds_up() {
        let cfg = UartConfig {
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        };
        // 10 bits at 115200 = 86.8us
        assert_eq!(cfg.transfer_time_us(1), 87);
    }
}
