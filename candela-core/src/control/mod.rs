//! Operator control model
//!
//! Turns encoder and button input into channel writes. This is the
//! producer side of the channel buffer; the frame engine never sees
//! modes or colors, only bytes.

pub mod fixture;
pub mod input;
pub mod mode;
pub mod wheel;

pub use fixture::{FixtureControl, Rgb};
pub use input::InputEvent;
pub use mode::OperatorMode;
pub use wheel::ColorWheel;
