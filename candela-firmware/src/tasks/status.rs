//! Status reporting task
//!
//! Logs frame throughput and any new faults once a second.

use defmt::*;
use embassy_time::{Duration, Ticker};

use candela_core::engine::FrameStats;
use candela_core::safety::Fault;

use crate::channels::with_engine;

/// Report interval in milliseconds
pub const STATUS_INTERVAL_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn status_task() {
    info!("Status task started");

    let mut ticker = Ticker::every(Duration::from_millis(STATUS_INTERVAL_MS));
    let mut last = FrameStats::default();
    let mut reported_faults = 0;

    loop {
        ticker.next().await;

        let Some((stats, fault_count, recent)) = with_engine(|engine| {
            (
                engine.stats(),
                engine.fault_count(),
                engine.last_fault(),
            )
        }) else {
            continue;
        };

        debug!(
            "DMX: {} frames/s ({} started, {} busy ticks)",
            stats.completed.wrapping_sub(last.completed),
            stats.started.wrapping_sub(last.started),
            stats.busy_ticks.wrapping_sub(last.busy_ticks),
        );

        if fault_count != reported_faults {
            report_fault(fault_count - reported_faults, recent);
            reported_faults = fault_count;
        }

        last = stats;
    }
}

fn report_fault(new: u32, recent: Option<Fault>) {
    match recent {
        Some(fault) => warn!("DMX: {} new fault(s), last {}", new, fault),
        None => warn!("DMX: {} new fault(s)", new),
    }
}
