//! DMX512 protocol constants
//!
//! Timings from USITT DMX512: a frame is a break, a mark-after-break,
//! then a start code and up to 512 slots at 250 kbaud 8N2. A full frame
//! repeats at roughly 44 Hz.

/// Start code for standard dimmer data
pub const START_CODE: u8 = 0x00;

/// Number of channel slots in a universe
pub const CHANNEL_COUNT: usize = 512;

/// Start code plus all channel slots
pub const FRAME_LEN: usize = CHANNEL_COUNT + 1;

/// Lowest channel address
pub const MIN_ADDRESS: u16 = 1;

/// Highest channel address
pub const MAX_ADDRESS: u16 = CHANNEL_COUNT as u16;

/// Line rate
pub const BAUD_RATE: u32 = 250_000;

/// Bits per slot on the wire: start, 8 data, 2 stop
pub const BITS_PER_SLOT: u32 = 11;

/// Duration of one slot in microseconds
pub const SLOT_TIME_US: u32 = BITS_PER_SLOT * 1_000_000 / BAUD_RATE;

/// Minimum break (line low)
pub const MIN_BREAK_US: u32 = 88;

/// Minimum mark-after-break (line high)
pub const MIN_MARK_US: u32 = 8;

/// Longest break or mark-after-break a transmitter may hold
pub const MAX_BREAK_MARK_US: u32 = 1_000_000;

/// Longest watchdog allowance on top of the nominal frame
pub const MAX_WATCHDOG_SLACK_US: u32 = 1_000_000;

/// Longest allowed idle between frames
pub const MAX_INTER_FRAME_GAP_US: u32 = 1_000_000;

/// Channels occupied by an RGB fixture
pub const FIXTURE_FOOTPRINT: u16 = 3;

/// Highest start address that still fits the fixture footprint
pub const MAX_START_ADDRESS: u16 = MAX_ADDRESS - FIXTURE_FOOTPRINT + 1;

/// Time on the wire for the data portion of a full frame
pub const fn data_time_us() -> u32 {
    FRAME_LEN as u32 * SLOT_TIME_US
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time() {
        assert_eq!(SLOT_TIME_US, 44);
    }

    #[test]
    fn test_frame_length() {
        assert_eq!(FRAME_LEN, 513);
        assert_eq!(data_time_us(), 22_572);
    }

    #[test]
    fn test_fixture_window_fits() {
        assert_eq!(MAX_START_ADDRESS, 510);
        assert_eq!(MAX_START_ADDRESS + FIXTURE_FOOTPRINT - 1, MAX_ADDRESS);
    }

    #[test]
    fn test_matches_uart_framing() {
        let uart = candela_hal::UartConfig::dmx512();
        assert_eq!(uart.baudrate, BAUD_RATE);
        assert_eq!(uart.bits_per_char(), BITS_PER_SLOT);
        assert_eq!(uart.transfer_time_us(FRAME_LEN as u32), data_time_us());
    }
}
