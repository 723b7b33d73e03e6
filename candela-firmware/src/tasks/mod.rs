//! Embassy async tasks
//!
//! All tasks share the one thread executor. The frame engine is reached
//! through `channels::with_engine`; the channel buffer needs no lock.

pub mod dmx;
pub mod input;
pub mod status;

pub use dmx::{dmx_tick_task, dmx_timer_task, dmx_tx_task};
pub use input::{input_task, FrontPanel};
pub use status::status_task;
