//! Attached-display enumeration and whole-monitor capture.

use crate::capture::{gdi, PixelBuffer};
use crate::error::{Error, Result};
use crate::window::Rect;

/// Screen rectangles of the capturable displays.
///
/// Index 0 is the virtual-screen bounding box (the union of all attached
/// displays), indices 1..=N are the individual displays - the mss indexing
/// convention. Ordering past index 0 follows OS enumeration order.
pub fn monitors() -> Result<Vec<Rect>> {
    platform::monitors()
}

/// Captures an entire display selected by its index in [`monitors`].
///
/// Fails with [`Error::MonitorIndexOutOfRange`] before attempting any
/// capture when `index` falls outside the table.
pub fn capture_monitor(index: usize) -> Result<PixelBuffer> {
    let table = monitors()?;
    validate_monitor_index(index, table.len())?;
    gdi::capture_rect(table[index])
}

/// Rejects indices outside `[0, count - 1]`.
pub(crate) fn validate_monitor_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(Error::MonitorIndexOutOfRange { index, count });
    }
    Ok(())
}

#[cfg(windows)]
mod platform {
    use windows::Win32::Foundation::{BOOL, LPARAM, RECT, TRUE};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
        SM_YVIRTUALSCREEN,
    };

    use super::Rect;
    use crate::error::{Error, Result};

    unsafe extern "system" fn enum_callback(
        hmonitor: HMONITOR,
        _hdc: HDC,
        _clip: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        unsafe {
            let rects = &mut *(lparam.0 as *mut Vec<Rect>);
            let mut info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            if GetMonitorInfoW(hmonitor, &mut info).as_bool() {
                let m = info.rcMonitor;
                rects.push(Rect::new(m.left, m.top, m.right, m.bottom));
            }
            TRUE
        }
    }

    pub fn monitors() -> Result<Vec<Rect>> {
        // Slot 0: union of all displays. A display left of or above the
        // primary gives the virtual screen a negative origin.
        let virtual_screen = unsafe {
            let x = GetSystemMetrics(SM_XVIRTUALSCREEN);
            let y = GetSystemMetrics(SM_YVIRTUALSCREEN);
            let w = GetSystemMetrics(SM_CXVIRTUALSCREEN);
            let h = GetSystemMetrics(SM_CYVIRTUALSCREEN);
            Rect::new(x, y, x + w, y + h)
        };

        let mut rects = vec![virtual_screen];
        unsafe {
            let ok = EnumDisplayMonitors(
                None,
                None,
                Some(enum_callback),
                LPARAM(&mut rects as *mut _ as isize),
            );
            if !ok.as_bool() {
                return Err(Error::CaptureUnavailable(
                    "EnumDisplayMonitors failed".into(),
                ));
            }
        }
        Ok(rects)
    }
}

#[cfg(not(windows))]
mod platform {
    use super::Rect;
    use crate::error::{Error, Result};

    pub fn monitors() -> Result<Vec<Rect>> {
        Err(Error::PlatformUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_within_range_is_accepted() {
        assert!(validate_monitor_index(0, 3).is_ok());
        assert!(validate_monitor_index(2, 3).is_ok());
    }

    #[test]
    fn test_index_out_of_range_is_rejected() {
        let err = validate_monitor_index(3, 3).unwrap_err();
        match err {
            Error::MonitorIndexOutOfRange { index, count } => {
                assert_eq!(index, 3);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_table_rejects_everything() {
        assert!(validate_monitor_index(0, 0).is_err());
    }
}
