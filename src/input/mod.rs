//! Synthetic pointer input.
//!
//! This module provides:
//! - The injection seam and `SendInput` backend (`backend`)
//! - Pure waypoint/coordinate math (`plan`)
//! - The paced executor for moves, clicks, and drags (`mouse`)

pub mod backend;
pub mod mouse;
pub mod plan;

pub use backend::{InputBackend, MouseButton, SendInputBackend};
pub use mouse::{Mouse, Pacer, SleepPacer, DEFAULT_DRAG_DURATION, DEFAULT_HOLD};
pub use plan::{drag_waypoints, to_absolute, Waypoint};
