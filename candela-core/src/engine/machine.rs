//! Frame engine
//!
//! Owns the transmit snapshot and drives the timer and line through
//! BREAK -> MARK -> DATA -> IDLE. It has three entry points, one per
//! execution context:
//!
//! - [`FrameEngine::tick`] from the cooperative driver loop
//! - [`FrameEngine::on_timer_expired`] from the timer completion signal
//! - [`FrameEngine::on_transmit_complete`] from the bulk transmit
//!   completion signal
//!
//! None of them block. Every transition inside a frame is triggered by
//! the completion signal of the step before it, so the only thing the
//! driver loop controls is when a new frame starts.

use candela_hal::{LineDriver, LineLevel, MonotonicClock, OneShotTimer};

use super::events::FrameEvent;
use super::state::FrameState;
use crate::buffer::{ChannelBuffer, FrameBuffers, TransmitBuffer};
use crate::config::{ConfigError, TimingConfig};
use crate::safety::{Fault, FaultCounter, FaultKind, FaultLog, FrameWatchdog, WatchdogStatus};

/// Result of one driver loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Snapshot latched and break started
    Started,
    /// Previous frame still in flight; nothing touched
    Busy,
    /// Idle, but the inter-frame gap has not elapsed yet
    Waiting,
    /// Frame in flight past its budget; reset to `Idle`
    Recovered,
}

/// Frame counters for observability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Frames that reached the break
    pub started: u32,
    /// Frames whose transmit completed
    pub completed: u32,
    /// Ticks rejected because a frame was in flight
    pub busy_ticks: u32,
}

/// DMX512 frame transmission engine
pub struct FrameEngine<'a, T, L, C> {
    timer: T,
    line: L,
    clock: C,
    buffers: FrameBuffers<'a>,
    state: FrameState,
    timing: TimingConfig,
    watchdog: FrameWatchdog,
    faults: FaultCounter,
    fault_log: FaultLog,
    stats: FrameStats,
    /// When the last frame returned to `Idle` (us)
    idle_since_us: Option<u64>,
}

impl<'a, T, L, C> FrameEngine<'a, T, L, C>
where
    T: OneShotTimer,
    L: LineDriver,
    C: MonotonicClock,
{
    /// Create an idle engine reading from `channels`, with default timing
    ///
    /// Hardware is not touched until the first `tick()`.
    pub fn new(channels: &'a ChannelBuffer, timer: T, line: L, clock: C) -> Self {
        let timing = TimingConfig::default();
        Self {
            timer,
            line,
            clock,
            buffers: FrameBuffers::new(channels),
            state: FrameState::Idle,
            watchdog: FrameWatchdog::new(timing.max_frame_period_us()),
            timing,
            faults: FaultCounter::new(),
            fault_log: FaultLog::new(),
            stats: FrameStats::default(),
            idle_since_us: None,
        }
    }

    /// Replace the frame timing
    ///
    /// Takes effect from the next timer arm. Invalid timing is rejected
    /// and the current timing kept.
    pub fn set_timing(&mut self, timing: TimingConfig) -> Result<(), ConfigError> {
        timing.validate()?;
        self.timing = timing;
        self.watchdog.set_timeout(timing.max_frame_period_us());

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "DMX timing: break={}us mark={}us gap={}us",
            timing.break_us,
            timing.mark_us,
            timing.inter_frame_gap_us
        );

        Ok(())
    }

    /// Driver loop entry point
    ///
    /// In `Idle` this latches the working buffer into the transmit
    /// snapshot, drives the line low and arms the break timer. In any
    /// other state it touches neither the snapshot nor the hardware,
    /// unless the watchdog finds the frame stalled.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.clock.now_us();

        if self.state.is_busy() {
            if self.watchdog.check(now) == WatchdogStatus::Stalled {
                self.recover(FaultKind::StalledFrame);
                return TickOutcome::Recovered;
            }
            self.stats.busy_ticks = self.stats.busy_ticks.wrapping_add(1);
            return TickOutcome::Busy;
        }

        if let Some(idle_since) = self.idle_since_us {
            if self.clock.elapsed_us(idle_since) < self.timing.inter_frame_gap_us as u64 {
                return TickOutcome::Waiting;
            }
        }

        // Idle accepts Start, so this always advances to Break
        let Some(next) = self.state.transition(FrameEvent::Start) else {
            return TickOutcome::Busy;
        };

        self.buffers.latch();
        self.line.set_raw_mode(LineLevel::Low);
        self.timer.arm(self.timing.break_us);
        self.watchdog.start(now);
        self.state = next;
        self.stats.started = self.stats.started.wrapping_add(1);

        TickOutcome::Started
    }

    /// Timer completion signal entry point
    pub fn on_timer_expired(&mut self) {
        match self.advance(FrameEvent::TimerExpired) {
            Some(FrameState::Mark) => {
                self.line.set_raw_mode(LineLevel::High);
                self.line.set_uart_mode();
                self.timer.arm(self.timing.mark_us);
            }
            Some(FrameState::Data) => {
                self.timer.disarm();
                self.line.transmit(self.buffers.transmit().as_bytes());
            }
            _ => {}
        }
    }

    /// Bulk transmit completion signal entry point
    pub fn on_transmit_complete(&mut self) {
        if self.advance(FrameEvent::TransmitComplete) == Some(FrameState::Idle) {
            self.watchdog.clear();
            self.idle_since_us = Some(self.clock.now_us());
            self.stats.completed = self.stats.completed.wrapping_add(1);
        }
    }

    /// Apply `event`, or recover if the current state does not accept it
    fn advance(&mut self, event: FrameEvent) -> Option<FrameState> {
        match self.state.transition(event) {
            Some(next) => {
                self.state = next;
                Some(next)
            }
            None => {
                self.recover(FaultKind::UnexpectedSignal(event));
                None
            }
        }
    }

    /// Disarm everything, return the line to mark and go `Idle`
    fn recover(&mut self, kind: FaultKind) {
        let fault = Fault {
            kind,
            state: self.state,
        };

        self.timer.disarm();
        if self.line.is_transmitting() {
            self.line.abort_transmit();
        }
        self.line.set_raw_mode(LineLevel::High);
        self.watchdog.clear();
        self.state = FrameState::Idle;
        self.idle_since_us = Some(self.clock.now_us());
        self.faults.increment();
        self.fault_log.record(fault);

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "DMX fault {} in {} (total {})",
            fault.kind,
            fault.state,
            self.faults.get()
        );
    }

    /// Current state
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Active timing
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Faults recovered so far
    pub fn fault_count(&self) -> u32 {
        self.faults.get()
    }

    /// Most recent fault
    pub fn last_fault(&self) -> Option<Fault> {
        self.fault_log.last().copied()
    }

    /// Recent fault history
    pub fn fault_log(&self) -> &FaultLog {
        &self.fault_log
    }

    /// Frame counters
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Snapshot of the frame in flight (or the last one sent)
    pub fn transmit_buffer(&self) -> &TransmitBuffer {
        self.buffers.transmit()
    }

    /// Producer-facing working buffer
    pub fn channels(&self) -> &'a ChannelBuffer {
        self.buffers.working()
    }

    /// Get access to the timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Get access to the line driver
    pub fn line(&self) -> &L {
        &self.line
    }

    #[cfg(test)]
    pub(crate) fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }
}
