//! DMX512 frame state machine
//!
//! Defines how a frame is put on the wire: break, mark-after-break, then
//! the 513-byte data burst. The state machine is explicit, finite, and
//! total: every (state, event) pair either advances or is a fault.

pub mod events;
pub mod machine;
pub mod state;

pub use events::FrameEvent;
pub use machine::{FrameEngine, FrameStats, TickOutcome};
pub use state::FrameState;
