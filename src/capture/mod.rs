//! Screen and window capture.
//!
//! This module provides:
//! - Rect-keyed screen capture (`capture_rect`)
//! - Whole-monitor capture (`monitors`, `capture_monitor`)
//! - Window capture composed from geometry + rect capture (`capture_window`)
//!
//! All captures produce an RGB [`PixelBuffer`]; encoding is the caller's
//! concern.

pub mod frame;
pub mod gdi;
pub mod monitor;

pub use frame::PixelBuffer;
pub use gdi::capture_rect;
pub use monitor::{capture_monitor, monitors};

use crate::error::Result;
use crate::window::{window_rect, WindowHandle};

/// Captures a window's on-screen pixels.
///
/// Resolves the window's rectangle (client area by default, full frame
/// including decorations when `client_area` is false) and grabs that screen
/// region. Fails with [`crate::Error::HandleInvalid`] when the handle is
/// stale; a minimized or fully occluded window captures whatever currently
/// occupies those screen pixels.
pub fn capture_window(handle: WindowHandle, client_area: bool) -> Result<PixelBuffer> {
    let rect = window_rect(handle, client_area)?;
    capture_rect(rect)
}
