//! Error types for window lookup, capture, and input injection.

use thiserror::Error;

/// Main error type for capture and input operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The window handle no longer refers to a live window.
    #[error("window handle is no longer valid (window closed?)")]
    HandleInvalid,

    /// Monitor index outside the attached-display table.
    #[error("monitor index {index} out of range ({count} entries, 0 = all monitors)")]
    MonitorIndexOutOfRange { index: usize, count: usize },

    /// The display/input surface of this crate is Windows-only.
    #[error("display and input APIs are only supported on Windows")]
    PlatformUnsupported,

    /// A required screen-grab capability failed.
    #[error("screen capture unavailable: {0} (is an interactive desktop session running?)")]
    CaptureUnavailable(String),

    /// A required input-injection capability failed.
    #[error("input injection unavailable: {0} (is an interactive desktop session running?)")]
    InjectionUnavailable(String),

    /// An unexpected Win32 failure during enumeration or geometry queries.
    #[cfg(windows)]
    #[error("window query failed: {0}")]
    WindowQueryFailed(#[from] windows::core::Error),
}

/// Result type alias for capture and input operations.
pub type Result<T> = std::result::Result<T, Error>;
