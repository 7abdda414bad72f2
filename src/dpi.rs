//! Best-effort process-wide DPI awareness.
//!
//! Without this, window rectangles come back in a scaled logical coordinate
//! space that does not line up with the physical pixels the capture path
//! returns, which silently shifts every capture and click target under
//! display scaling.

use std::sync::Once;

static INIT: Once = Once::new();

/// Declares this process DPI-aware so geometry queries return physical
/// pixel coordinates.
///
/// Idempotent and best-effort: tries per-monitor awareness first, then the
/// coarser system-wide mode, and proceeds silently if every attempt fails
/// (geometry still works, just less precisely under display scaling). Call
/// once before the first geometry or capture query. No-op off Windows.
pub fn ensure_dpi_awareness() {
    INIT.call_once(apply_awareness);
}

#[cfg(windows)]
fn apply_awareness() {
    use tracing::{debug, warn};

    // Ordered fallback chain, newest API first. Stops at the first mode the
    // OS accepts; a mode set earlier in the process lifetime (e.g. via
    // manifest) makes these calls fail, which is fine.
    let strategies: [(&str, fn() -> bool); 3] = [
        ("per-monitor-v2", platform::try_per_monitor_v2),
        ("per-monitor", platform::try_per_monitor),
        ("system", platform::try_system),
    ];

    for (name, attempt) in strategies {
        if attempt() {
            debug!(mode = name, "DPI awareness set");
            return;
        }
    }
    warn!("could not set DPI awareness; window coordinates may be scaled");
}

#[cfg(not(windows))]
fn apply_awareness() {}

#[cfg(windows)]
mod platform {
    use windows::Win32::UI::HiDpi::{
        SetProcessDpiAwareness, SetProcessDpiAwarenessContext,
        DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, PROCESS_PER_MONITOR_DPI_AWARE,
        PROCESS_SYSTEM_DPI_AWARE,
    };

    pub fn try_per_monitor_v2() -> bool {
        unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() }
    }

    pub fn try_per_monitor() -> bool {
        unsafe { SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE).is_ok() }
    }

    pub fn try_system() -> bool {
        unsafe { SetProcessDpiAwareness(PROCESS_SYSTEM_DPI_AWARE).is_ok() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_calls_are_noops() {
        // The Once guard makes the second call a no-op; neither may panic.
        ensure_dpi_awareness();
        ensure_dpi_awareness();
    }
}
