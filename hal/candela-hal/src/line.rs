//! DMX transmit line abstraction
//!
//! The physical line is a differential RS-485 pair driven from one MCU
//! pin. That pin must be switchable between a raw digital level (for the
//! break and mark-after-break) and the UART's framed output (for data).

/// Raw line level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineLevel {
    /// Logic 0 (space). Held for the break.
    Low,
    /// Logic 1 (mark). The idle level of the line.
    High,
}

/// DMX transmit line driver
///
/// `set_raw_mode` and `set_uart_mode` are mutually exclusive and take
/// effect before they return. `transmit` is asynchronous: it returns as
/// soon as the bulk send has started, and the platform later raises the
/// completion signal exactly once per call, routed to the frame engine's
/// `on_transmit_complete` entry point.
pub trait LineDriver {
    /// Take the pin away from the UART and drive it at `level`
    fn set_raw_mode(&mut self, level: LineLevel);

    /// Hand the pin to the UART (idles at mark)
    fn set_uart_mode(&mut self);

    /// Begin a bulk send of `bytes` through the UART
    ///
    /// Implementations must finish reading `bytes` (or copy them) before
    /// returning; the caller may reuse the slice afterwards.
    fn transmit(&mut self, bytes: &[u8]);

    /// Abort any in-flight bulk send without signaling completion
    ///
    /// Idempotent; safe to call when nothing is in flight.
    fn abort_transmit(&mut self);

    /// Check if a bulk send is in flight
    fn is_transmitting(&self) -> bool;
}

impl<T: LineDriver + ?Sized> LineDriver for &mut T {
    fn set_raw_mode(&mut self, level: LineLevel) {
        (**self).set_raw_mode(level);
    }

    fn set_uart_mode(&mut self) {
        (**self).set_uart_mode();
    }

    fn transmit(&mut self, bytes: &[u8]) {
        (**self).transmit(bytes);
    }

    fn abort_transmit(&mut self) {
        (**self).abort_transmit();
    }

    fn is_transmitting(&self) -> bool {
        (**self).is_transmitting()
    }
}
