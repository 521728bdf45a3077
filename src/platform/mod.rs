//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input keys
//! - Time/ticks

pub mod input;
pub mod time;

pub use input::{Key, KeyEvent};
pub use time::FixedStep;
