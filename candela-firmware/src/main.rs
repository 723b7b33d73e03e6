//! Candela - DMX512 Fixture Controller Firmware
//!
//! Main firmware binary for RP2040-based RGB fixture controllers.
//! Streams the channel buffer as continuous DMX512 frames on UART0 through
//! an RS-485 transceiver, while a front-panel encoder and button set the
//! fixture's start address and colors.
//!
//! Pinout:
//! - GPIO0: UART0 TX to the transceiver's DI
//! - GPIO2: transceiver DE (active high)
//! - GPIO10/GPIO11: encoder A/B
//! - GPIO12: encoder push button (active low)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pac;
use embassy_rp::uart::UartTx;
use {defmt_rtt as _, panic_probe as _};

use candela_core::control::FixtureControl;
use candela_drivers::{DebouncedButton, QuadratureEncoder, Rs485Direction};
use candela_hal::UartConfig;
use candela_hal_rp2040::{uart_config, EmbassyClock, Rp2040Line};

use crate::channels::{install_engine, Engine, CHANNELS, LINE_TX, TIMER};
use crate::tasks::FrontPanel;

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Candela firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // DMX framing: 250 kbaud, 8N2
    let framing = UartConfig::dmx512();
    let uart_cfg = match uart_config(&framing) {
        Ok(cfg) => cfg,
        Err(e) => defmt::panic!("DMX framing not supported: {}", e),
    };
    let tx = UartTx::new(p.UART0, p.PIN_0, p.DMA_CH0, uart_cfg);
    let direction = match Rs485Direction::new(Output::new(p.PIN_2, Level::Low), true) {
        Ok(direction) => direction,
        Err(e) => match e {},
    };

    // UART0 is owned by `tx`; the line only touches its BRK bit
    let line = Rp2040Line::new(pac::UART0, &LINE_TX);
    let mut engine: Engine = Engine::new(&CHANNELS, TIMER.handle(), line, EmbassyClock);
    if let Err(e) = engine.set_timing(config.timing) {
        warn!("Timing rejected ({}), using defaults", e);
    }
    let period_us = engine.timing().frame_period_us();
    install_engine(engine);
    info!("Frame engine ready, {}us per frame", period_us);

    let encoder = match QuadratureEncoder::new(
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
    ) {
        Ok(encoder) => encoder,
        Err(e) => match e {},
    };
    let button = DebouncedButton::new(
        Input::new(p.PIN_12, Pull::Up),
        tasks::input::POLL_INTERVAL_MS,
    );
    let panel = FrontPanel { encoder, button };
    let control = FixtureControl::new(&config);

    // Services first so the first tick has someone to talk to
    unwrap!(spawner.spawn(tasks::dmx_timer_task()));
    unwrap!(spawner.spawn(tasks::dmx_tx_task(tx, direction)));
    unwrap!(spawner.spawn(tasks::input_task(panel, control)));
    unwrap!(spawner.spawn(tasks::dmx_tick_task()));
    unwrap!(spawner.spawn(tasks::status_task()));

    info!("All tasks spawned");
}
