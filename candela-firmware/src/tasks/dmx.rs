//! DMX frame tasks
//!
//! - `dmx_tick_task` is the driver loop: it calls `tick()` every
//!   millisecond and the engine decides whether a new frame may start.
//! - `dmx_timer_task` services the break/mark timer and feeds expiries to
//!   the engine.
//! - `dmx_tx_task` owns the UART transmitter and reports when the last
//!   slot has left the wire.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::{Async, UartTx};
use embassy_time::{Duration, Ticker};

use candela_core::engine::TickOutcome;
use candela_drivers::Rs485Direction;

use crate::channels::{with_engine, LINE_TX, TIMER};

/// Driver loop interval in microseconds
///
/// Bounds the idle time between frames when no inter-frame gap is set.
pub const TICK_INTERVAL_US: u64 = 1000;

/// Drive the frame engine
///
/// Ticks that land while a frame is in flight, or inside the inter-frame
/// gap, are no-ops.
#[embassy_executor::task]
pub async fn dmx_tick_task() {
    info!("DMX tick task started");

    let mut ticker = Ticker::every(Duration::from_micros(TICK_INTERVAL_US));

    loop {
        match with_engine(|engine| engine.tick()) {
            Some(TickOutcome::Recovered) => warn!("DMX frame stalled, engine reset"),
            Some(_) => {}
            None => warn!("DMX tick before engine installed"),
        }

        ticker.next().await;
    }
}

/// Break/mark timer service
#[embassy_executor::task]
pub async fn dmx_timer_task() {
    info!("DMX timer task started");

    TIMER
        .run(|| {
            with_engine(|engine| engine.on_timer_expired());
        })
        .await
}

/// UART transmit service
///
/// Owns the RS-485 driver-enable pin so the transmitter stays enabled
/// for as long as the service runs.
#[embassy_executor::task]
pub async fn dmx_tx_task(
    mut tx: UartTx<'static, Async>,
    _direction: Rs485Direction<Output<'static>>,
) {
    info!("DMX transmit task started");

    LINE_TX
        .run(&mut tx, || {
            with_engine(|engine| engine.on_transmit_complete());
        })
        .await
}
