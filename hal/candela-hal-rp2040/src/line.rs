//! DMX line driver on an RP2040 UART
//!
//! The break and mark are produced with the UART's line-control `BRK`
//! bit rather than by re-muxing the pin to SIO: with `BRK` set the TX
//! output is held low, and clearing it returns the line to the UART's
//! idle mark. Data goes out through a DMA-backed `UartTx` owned by the
//! transmit service task.

use embassy_futures::select::{select, Either};
use embassy_rp::pac;
use embassy_rp::uart::{self, Async, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heapless::Vec;
use portable_atomic::{AtomicBool, Ordering};

use candela_core::dmx::FRAME_LEN;
use candela_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use candela_hal::{LineDriver, LineLevel};

/// Frame staged for the transmit service
pub type StagedFrame = Vec<u8, FRAME_LEN>;

/// Framing the RP2040 UART cannot produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedFraming(pub DataBits);

/// Translate a framing config to embassy-rp's UART config
pub fn uart_config(cfg: &UartConfig) -> Result<uart::Config, UnsupportedFraming> {
    let mut out = uart::Config::default();
    out.baudrate = cfg.baudrate;
    out.data_bits = match cfg.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return Err(UnsupportedFraming(DataBits::Nine)),
    };
    out.parity = match cfg.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match cfg.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Ok(out)
}

/// Shared state between [`Rp2040Line`] and the transmit service task
pub struct TxChannel {
    request: Signal<CriticalSectionRawMutex, StagedFrame>,
    abort: Signal<CriticalSectionRawMutex, ()>,
    busy: AtomicBool,
}

impl Default for TxChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TxChannel {
    /// Create an idle channel, usable in a `static`
    pub const fn new() -> Self {
        Self {
            request: Signal::new(),
            abort: Signal::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Service loop: send each staged frame and call `on_complete` once
    /// the last stop bit has left the shift register
    ///
    /// An abort drops the in-flight write (which stops its DMA) and does
    /// not call `on_complete`.
    pub async fn run<F: FnMut()>(&self, tx: &mut UartTx<'static, Async>, mut on_complete: F) -> ! {
        loop {
            let frame = self.request.wait().await;
            self.abort.reset();

            let sent = select(
                async {
                    let result = tx.write(&frame).await;
                    // DMA done only means the FIFO has the tail; wait for the wire
                    while tx.busy() {
                        embassy_futures::yield_now().await;
                    }
                    result
                },
                self.abort.wait(),
            )
            .await;

            match sent {
                Either::First(result) => {
                    if let Err(_e) = result {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("DMX UART write failed: {}", _e);
                    }
                    self.busy.store(false, Ordering::Release);
                    on_complete();
                }
                Either::Second(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("DMX transmit aborted");
                }
            }
        }
    }
}

/// DMX line on one RP2040 UART
pub struct Rp2040Line {
    regs: pac::uart::Uart,
    channel: &'static TxChannel,
}

impl Rp2040Line {
    /// Wrap a UART already configured for DMX framing
    ///
    /// `regs` must be the register block of the UART owned by the
    /// transmit service's `UartTx`. The line starts at idle mark.
    pub fn new(regs: pac::uart::Uart, channel: &'static TxChannel) -> Self {
        let mut line = Self { regs, channel };
        line.set_uart_mode();
        line
    }

    fn set_break(&mut self, on: bool) {
        self.regs.uartlcr_h().modify(|w| w.set_brk(on));
    }
}

impl LineDriver for Rp2040Line {
    fn set_raw_mode(&mut self, level: LineLevel) {
        self.set_break(level == LineLevel::Low);
    }

    fn set_uart_mode(&mut self) {
        self.set_break(false);
    }

    fn transmit(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(FRAME_LEN);
        let mut frame = StagedFrame::new();
        // Cannot fail: len is within capacity
        let _ = frame.extend_from_slice(&bytes[..len]);

        self.channel.busy.store(true, Ordering::Release);
        self.channel.request.signal(frame);
    }

    fn abort_transmit(&mut self) {
        self.channel.request.reset();
        if self.channel.busy.swap(false, Ordering::AcqRel) {
            self.channel.abort.signal(());
        }
    }

    fn is_transmitting(&self) -> bool {
        self.channel.busy.load(Ordering::Acquire)
    }
}
