//! Screen-coordinate rectangles for windows.
//!
//! Capture and click targeting must agree on which coordinate frame is in
//! use: the client area excludes the title bar and borders, the full window
//! rect includes them. Mixing the two shifts every subsequent pixel and
//! click coordinate by the decoration offset.

use crate::error::Result;
use crate::window::WindowHandle;

/// An axis-aligned rectangle in integer screen-pixel coordinates.
///
/// Width and height clamp to zero, so a malformed rect (right < left or
/// bottom < top) degrades to an empty region instead of a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels, never negative.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    /// Height in pixels, never negative.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    /// True when the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Gets a window's rectangle in screen coordinates.
///
/// With `client_area` set, returns the drawable interior: the client origin
/// (0,0) converted to screen coordinates, sized by the client width/height.
/// Otherwise returns the full window extent including decorations.
///
/// Fails with [`crate::Error::HandleInvalid`] when the handle no longer
/// refers to a live window.
pub fn window_rect(handle: WindowHandle, client_area: bool) -> Result<Rect> {
    platform::window_rect(handle, client_area)
}

#[cfg(windows)]
mod platform {
    use windows::Win32::Foundation::{HWND, POINT, RECT};
    use windows::Win32::Graphics::Gdi::ClientToScreen;
    use windows::Win32::UI::WindowsAndMessaging::{GetClientRect, GetWindowRect, IsWindow};

    use super::Rect;
    use crate::error::{Error, Result};
    use crate::window::WindowHandle;

    pub fn window_rect(handle: WindowHandle, client_area: bool) -> Result<Rect> {
        let hwnd = HWND(handle.0 as *mut core::ffi::c_void);
        unsafe {
            if !IsWindow(hwnd).as_bool() {
                return Err(Error::HandleInvalid);
            }

            if client_area {
                let mut origin = POINT { x: 0, y: 0 };
                if !ClientToScreen(hwnd, &mut origin).as_bool() {
                    return Err(Error::WindowQueryFailed(windows::core::Error::from_win32()));
                }
                let mut client = RECT::default();
                GetClientRect(hwnd, &mut client)?;
                let width = client.right - client.left;
                let height = client.bottom - client.top;
                Ok(Rect::new(
                    origin.x,
                    origin.y,
                    origin.x + width,
                    origin.y + height,
                ))
            } else {
                let mut frame = RECT::default();
                GetWindowRect(hwnd, &mut frame)?;
                Ok(Rect::new(frame.left, frame.top, frame.right, frame.bottom))
            }
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::Rect;
    use crate::error::{Error, Result};
    use crate::window::WindowHandle;

    pub fn window_rect(_handle: WindowHandle, _client_area: bool) -> Result<Rect> {
        Err(Error::PlatformUnsupported)
    }
}
