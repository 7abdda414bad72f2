//! Window capture and pointer automation for Windows.
//!
//! The building blocks for driving a game (or any GUI) by screenshot + click:
//! - window discovery by title ([`window::list_windows`], [`window::find_window`])
//! - window geometry in screen coordinates ([`window::window_rect`])
//! - screen-region and monitor capture into RGB buffers ([`capture`])
//! - synthetic pointer input with timed click/drag sequences ([`input`])
//!
//! Call [`ensure_dpi_awareness`] once, before the first geometry or capture
//! query, so the OS reports physical pixel coordinates under display scaling.
//!
//! Everything here is synchronous and blocking; [`input::Mouse::drag`] in
//! particular blocks for its full real-time duration because the pacing is
//! part of the simulated behavior. Concurrent callers must serialize
//! externally.

pub mod capture;
pub mod dpi;
pub mod error;
pub mod input;
pub mod window;

pub use capture::{capture_monitor, capture_rect, capture_window, monitors, PixelBuffer};
pub use dpi::ensure_dpi_awareness;
pub use error::{Error, Result};
pub use input::{Mouse, MouseButton};
pub use window::{find_window, list_windows, window_rect, MatchOptions, Rect, WindowEntry, WindowHandle};
