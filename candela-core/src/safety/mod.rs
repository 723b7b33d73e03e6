//! Fault detection and bookkeeping
//!
//! Faults never stop frame production. They are counted, remembered for
//! inspection, and the engine recovers to `Idle`.

pub mod fault;
pub mod watchdog;

pub use fault::{Fault, FaultCounter, FaultKind, FaultLog, FAULT_LOG_LEN};
pub use watchdog::{FrameWatchdog, WatchdogStatus};
