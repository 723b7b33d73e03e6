//! Shared state between tasks
//!
//! The channel buffer is written by the input task and read by the frame
//! engine without locking. The engine itself sits behind a critical-section
//! mutex because three tasks drive it: the tick loop and the two hardware
//! signal services.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use candela_core::buffer::ChannelBuffer;
use candela_core::engine::FrameEngine;
use candela_hal_rp2040::{EmbassyClock, Rp2040Line, SignalTimer, TimerChannel, TxChannel};

/// Frame engine on RP2040 hardware
pub type Engine = FrameEngine<'static, SignalTimer, Rp2040Line, EmbassyClock>;

/// Working channel levels (producer side)
pub static CHANNELS: ChannelBuffer = ChannelBuffer::new();

/// Break/mark timer service
pub static TIMER: TimerChannel = TimerChannel::new();

/// UART transmit service
pub static LINE_TX: TxChannel = TxChannel::new();

/// The frame engine, installed once by `main`
static ENGINE: Mutex<CriticalSectionRawMutex, RefCell<Option<Engine>>> =
    Mutex::new(RefCell::new(None));

/// Install the engine. Replaces any previous one.
pub fn install_engine(engine: Engine) {
    ENGINE.lock(|cell| {
        cell.replace(Some(engine));
    });
}

/// Run `f` on the engine, or return `None` before it is installed
pub fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
    ENGINE.lock(|cell| cell.borrow_mut().as_mut().map(f))
}
