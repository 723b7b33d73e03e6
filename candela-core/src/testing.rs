//! Simulated hardware for host tests
//!
//! Records every call so tests can assert on what reached the wire and
//! which hardware was left armed.

use core::cell::Cell;
use std::vec::Vec;

use candela_hal::{LineDriver, LineLevel, MonotonicClock, OneShotTimer};

use crate::engine::{FrameEngine, FrameState};

#[derive(Debug, Default)]
pub(crate) struct SimTimer {
    /// Pending countdown, if armed
    pub armed: Option<u32>,
    /// Every duration ever armed, in order
    pub history: Vec<u32>,
}

impl OneShotTimer for SimTimer {
    fn arm(&mut self, duration_us: u32) {
        self.armed = Some(duration_us);
        self.history.push(duration_us);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

/// Output mode last applied to a `SimLine`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineMode {
    Raw(LineLevel),
    Uart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineOp {
    Raw(LineLevel),
    Uart,
    Transmit,
    Abort,
}

#[derive(Debug)]
pub(crate) struct SimLine {
    pub mode: LineMode,
    pub transmitting: bool,
    /// Bytes handed to each `transmit` call
    pub frames: Vec<Vec<u8>>,
    pub ops: Vec<LineOp>,
}

impl Default for SimLine {
    fn default() -> Self {
        Self {
            mode: LineMode::Raw(LineLevel::High),
            transmitting: false,
            frames: Vec::new(),
            ops: Vec::new(),
        }
    }
}

impl LineDriver for SimLine {
    fn set_raw_mode(&mut self, level: LineLevel) {
        self.mode = LineMode::Raw(level);
        self.ops.push(LineOp::Raw(level));
    }

    fn set_uart_mode(&mut self) {
        self.mode = LineMode::Uart;
        self.ops.push(LineOp::Uart);
    }

    fn transmit(&mut self, bytes: &[u8]) {
        self.transmitting = true;
        self.frames.push(bytes.to_vec());
        self.ops.push(LineOp::Transmit);
    }

    fn abort_transmit(&mut self) {
        self.transmitting = false;
        self.ops.push(LineOp::Abort);
    }

    fn is_transmitting(&self) -> bool {
        self.transmitting
    }
}

#[derive(Debug, Default)]
pub(crate) struct SimClock {
    now: Cell<u64>,
}

impl SimClock {
    pub fn advance(&self, us: u64) {
        self.now.set(self.now.get() + us);
    }
}

impl MonotonicClock for SimClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }
}

pub(crate) type SimEngine<'a> = FrameEngine<'a, SimTimer, SimLine, &'a SimClock>;

/// Play the hardware side of one frame: the break and mark timers, then
/// the transmit completion. Advances the clock by plausible amounts.
pub(crate) fn finish_frame(engine: &mut SimEngine<'_>, clock: &SimClock) {
    assert_eq!(engine.state(), FrameState::Break);
    clock.advance(engine.timing().break_us as u64);
    engine.on_timer_expired();
    clock.advance(engine.timing().mark_us as u64);
    engine.on_timer_expired();
    clock.advance(crate::dmx::data_time_us() as u64);
    engine.line_mut().transmitting = false;
    engine.on_transmit_complete();
}
