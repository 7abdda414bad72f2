//! Screen-rectangle capture via GDI.
//!
//! `BitBlt` from the screen DC into a 32-bit DIB, then normalize the BGRA
//! bits to an RGB [`PixelBuffer`]. Slower than a D3D duplication pipeline
//! but keyed by an arbitrary screen rectangle, which is what window-relative
//! capture needs.

use crate::capture::PixelBuffer;
use crate::error::Result;
use crate::window::Rect;

/// Captures exactly the screen region described by `rect`.
///
/// An empty rect (including one with malformed extents, which clamp to
/// zero) yields a 0x0 buffer without touching the OS. Output dimensions
/// always equal `rect.width() x rect.height()`.
pub fn capture_rect(rect: Rect) -> Result<PixelBuffer> {
    if rect.is_empty() {
        return Ok(PixelBuffer::empty());
    }
    platform::capture_rect(rect)
}

#[cfg(windows)]
mod platform {
    use tracing::debug;
    use windows::Win32::Graphics::Gdi::{
        BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC,
        GetDIBits, ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, CAPTUREBLT,
        DIB_RGB_COLORS, ROP_CODE, SRCCOPY,
    };

    use super::Rect;
    use crate::capture::PixelBuffer;
    use crate::error::{Error, Result};

    pub fn capture_rect(rect: Rect) -> Result<PixelBuffer> {
        let width = rect.width() as i32;
        let height = rect.height() as i32;
        debug!(
            left = rect.left,
            top = rect.top,
            width,
            height,
            "capturing screen rect"
        );

        unsafe {
            let screen_dc = GetDC(None);
            if screen_dc.is_invalid() {
                return Err(Error::CaptureUnavailable("GetDC failed".into()));
            }

            let mem_dc = CreateCompatibleDC(screen_dc);
            if mem_dc.is_invalid() {
                ReleaseDC(None, screen_dc);
                return Err(Error::CaptureUnavailable(
                    "CreateCompatibleDC failed".into(),
                ));
            }

            let bitmap = CreateCompatibleBitmap(screen_dc, width, height);
            if bitmap.is_invalid() {
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Err(Error::CaptureUnavailable(
                    "CreateCompatibleBitmap failed".into(),
                ));
            }

            let old_bitmap = SelectObject(mem_dc, bitmap);

            // CAPTUREBLT picks up layered windows the plain SRCCOPY misses.
            let blit = BitBlt(
                mem_dc,
                0,
                0,
                width,
                height,
                screen_dc,
                rect.left,
                rect.top,
                ROP_CODE(SRCCOPY.0 | CAPTUREBLT.0),
            );
            if let Err(e) = blit {
                SelectObject(mem_dc, old_bitmap);
                let _ = DeleteObject(bitmap);
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Err(Error::CaptureUnavailable(format!("BitBlt failed: {e}")));
            }

            // Negative biHeight requests a top-down DIB so rows come out in
            // the buffer's top-to-bottom order.
            let mut bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: width,
                    biHeight: -height,
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut bgra = vec![0u8; (width as usize) * (height as usize) * 4];
            let copied = GetDIBits(
                mem_dc,
                bitmap,
                0,
                height as u32,
                Some(bgra.as_mut_ptr() as *mut std::ffi::c_void),
                &mut bmi,
                DIB_RGB_COLORS,
            );

            SelectObject(mem_dc, old_bitmap);
            let _ = DeleteObject(bitmap);
            let _ = DeleteDC(mem_dc);
            ReleaseDC(None, screen_dc);

            if copied == 0 {
                return Err(Error::CaptureUnavailable("GetDIBits failed".into()));
            }

            Ok(PixelBuffer::from_bgra(
                width as u32,
                height as u32,
                &bgra,
            ))
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::Rect;
    use crate::capture::PixelBuffer;
    use crate::error::{Error, Result};

    pub fn capture_rect(_rect: Rect) -> Result<PixelBuffer> {
        Err(Error::PlatformUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rect_short_circuits() {
        // Width clamps to zero, so this must return 0x0 without an OS call
        // on any platform.
        let degenerate = Rect::new(100, 100, 50, 200);
        let buffer = capture_rect(degenerate).unwrap();
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
    }

    #[test]
    fn test_zero_size_rect_short_circuits() {
        let buffer = capture_rect(Rect::new(10, 10, 10, 10)).unwrap();
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
    }
}
