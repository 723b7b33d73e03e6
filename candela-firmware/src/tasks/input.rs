//! Front-panel input task
//!
//! Polls the encoder and button, updates the operator state and rewrites
//! the fixture's channels whenever something changes. In wheel mode the
//! color also steps on its own.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use candela_core::control::{FixtureControl, InputEvent, OperatorMode};
use candela_drivers::{DebouncedButton, QuadratureEncoder};

use crate::channels::CHANNELS;

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u32 = 2;

/// Wheel step interval in milliseconds
pub const WHEEL_INTERVAL_MS: u32 = 40;

/// Front-panel hardware
pub struct FrontPanel {
    pub encoder: QuadratureEncoder<Input<'static>, Input<'static>>,
    pub button: DebouncedButton<Input<'static>>,
}

/// Input task
#[embassy_executor::task]
pub async fn input_task(mut panel: FrontPanel, mut control: FixtureControl) {
    info!("Input task started in mode {}", control.mode().label());

    apply(&control);

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS as u64));
    let wheel_every = WHEEL_INTERVAL_MS / POLL_INTERVAL_MS;
    let mut wheel_count = 0;

    loop {
        ticker.next().await;

        let mut changed = false;

        // GPIO reads are infallible on RP2040
        if let Ok(Some(event)) = panel.encoder.poll() {
            changed |= handle(&mut control, event);
        }
        if let Ok(true) = panel.button.poll() {
            changed |= handle(&mut control, InputEvent::ButtonPress);
        }

        if control.mode() == OperatorMode::Wheel {
            wheel_count += 1;
            if wheel_count >= wheel_every {
                wheel_count = 0;
                changed |= control.advance_wheel();
            }
        }

        if changed {
            apply(&control);
        }
    }
}

fn handle(control: &mut FixtureControl, event: InputEvent) -> bool {
    let was_selecting = control.is_selecting();
    let changed = control.handle(event);

    if control.is_selecting() != was_selecting {
        if control.is_selecting() {
            debug!("Select mode (current {})", control.mode().label());
        } else {
            info!("Mode {} ({})", control.mode().label(), control.display_value());
        }
    }

    changed
}

fn apply(control: &FixtureControl) {
    if let Err(e) = control.load(&CHANNELS) {
        warn!("Channel update rejected: {}", e);
    }
}
