//! Play simulation
//!
//! Gameplay glue that sits on top of the host engine:
//! - Fixed timestep only
//! - Camera follow with integer offsets
//! - Score and level bookkeeping owned by an explicit session
//! - No rendering or platform dependencies

pub mod controls;
pub mod state;
pub mod tick;
pub mod viewport;

pub use state::{Facing, GameEvent, PlaySession, Player, TickOutcome};
pub use tick::tick;
pub use viewport::{Bounds, ScreenSize, Viewport, ViewportMargins, scroll_viewport};
