//! Window discovery and geometry.
//!
//! This module provides:
//! - Window enumeration and title lookup (`list_windows`, `find_window`)
//! - Screen-coordinate rectangles for a window (`window_rect`)

pub mod directory;
pub mod geometry;

pub use directory::{find_window, list_windows, match_entry, MatchOptions, WindowEntry, WindowHandle};
pub use geometry::{window_rect, Rect};
