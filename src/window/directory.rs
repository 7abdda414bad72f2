//! Visible-window enumeration and title lookup.

use std::fmt;

use crate::error::Result;

/// Opaque handle to a live OS window.
///
/// Borrowed from the OS, never created by this crate. Becomes stale when the
/// window closes; the next geometry or capture call on a stale handle fails
/// with [`crate::Error::HandleInvalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub(crate) isize);

impl WindowHandle {
    /// The raw HWND bit pattern, for display and interop.
    pub fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window observed during enumeration: handle plus title.
#[derive(Debug, Clone)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub title: String,
}

/// How [`find_window`] compares the query against window titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Require the whole title to equal the query instead of containing it.
    pub exact: bool,
    /// Compare titles without lowercasing first.
    pub case_sensitive: bool,
}

/// Snapshots all visible top-level windows with a non-empty title.
///
/// Order is whatever the OS enumeration yields - deterministic per call,
/// nothing more. The snapshot is not live; handles may go stale at any time.
pub fn list_windows() -> Result<Vec<WindowEntry>> {
    platform::list_windows()
}

/// Finds the first visible top-level window whose title matches `query`.
///
/// Returns `Ok(None)` when nothing matches - a miss is a normal empty
/// result, not an error. When several windows share a matching title the
/// first in enumeration order wins; there is deliberately no "best match"
/// heuristic.
pub fn find_window(query: &str, options: MatchOptions) -> Result<Option<WindowHandle>> {
    let entries = list_windows()?;
    Ok(match_entry(&entries, query, options))
}

/// Pure matching core of [`find_window`], usable against any entry snapshot.
pub fn match_entry(
    entries: &[WindowEntry],
    query: &str,
    options: MatchOptions,
) -> Option<WindowHandle> {
    let norm = |s: &str| {
        if options.case_sensitive {
            s.to_string()
        } else {
            s.to_lowercase()
        }
    };

    let q = norm(query);
    for entry in entries {
        let title = norm(&entry.title);
        let hit = if options.exact {
            title == q
        } else {
            title.contains(&q)
        };
        if hit {
            return Some(entry.handle);
        }
    }
    None
}

/// Trims an enumerated title, dropping windows whose title is empty or
/// whitespace-only.
#[cfg_attr(not(windows), allow(dead_code))]
fn usable_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(windows)]
mod platform {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;

    use tracing::debug;
    use windows::Win32::Foundation::{BOOL, HWND, LPARAM, TRUE};
    use windows::Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
    };

    use super::{usable_title, WindowEntry, WindowHandle};
    use crate::error::Result;

    unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
        unsafe {
            let entries = &mut *(lparam.0 as *mut Vec<WindowEntry>);

            if !IsWindowVisible(hwnd).as_bool() {
                return TRUE;
            }

            let title_len = GetWindowTextLengthW(hwnd);
            if title_len <= 0 {
                return TRUE;
            }
            let mut title_buf: Vec<u16> = vec![0; (title_len + 1) as usize];
            let copied = GetWindowTextW(hwnd, &mut title_buf);
            if copied <= 0 {
                return TRUE;
            }
            let raw = OsString::from_wide(&title_buf[..copied as usize])
                .to_string_lossy()
                .to_string();

            if let Some(title) = usable_title(&raw) {
                entries.push(WindowEntry {
                    handle: WindowHandle(hwnd.0 as isize),
                    title,
                });
            }
            TRUE
        }
    }

    pub fn list_windows() -> Result<Vec<WindowEntry>> {
        let mut entries: Vec<WindowEntry> = Vec::new();
        unsafe {
            EnumWindows(
                Some(enum_callback),
                LPARAM(&mut entries as *mut _ as isize),
            )?;
        }
        debug!(count = entries.len(), "enumerated visible windows");
        Ok(entries)
    }
}

#[cfg(not(windows))]
mod platform {
    use super::WindowEntry;
    use crate::error::{Error, Result};

    pub fn list_windows() -> Result<Vec<WindowEntry>> {
        Err(Error::PlatformUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<WindowEntry> {
        [(100, "Foo"), (200, "FooBar"), (300, "Baz")]
            .into_iter()
            .map(|(handle, title)| WindowEntry {
                handle: WindowHandle(handle),
                title: title.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_substring_match_returns_first_in_order() {
        let entries = directory();
        let found = match_entry(&entries, "foo", MatchOptions::default());
        assert_eq!(found, Some(WindowHandle(100)));
    }

    #[test]
    fn test_exact_match_skips_substring_hits() {
        let entries = directory();
        let options = MatchOptions {
            exact: true,
            ..Default::default()
        };
        assert_eq!(
            match_entry(&entries, "foobar", options),
            Some(WindowHandle(200))
        );
        // "Foo" is a substring of "FooBar" but exact match must not fire on it.
        assert_eq!(match_entry(&entries, "fooba", options), None);
    }

    #[test]
    fn test_no_match_is_none() {
        let entries = directory();
        assert_eq!(match_entry(&entries, "qux", MatchOptions::default()), None);
    }

    #[test]
    fn test_empty_directory_is_none() {
        assert_eq!(match_entry(&[], "foo", MatchOptions::default()), None);
    }

    #[test]
    fn test_case_sensitivity() {
        let entries = vec![WindowEntry {
            handle: WindowHandle(7),
            title: "clash royale".to_string(),
        }];
        assert_eq!(
            match_entry(&entries, "Clash", MatchOptions::default()),
            Some(WindowHandle(7))
        );
        let sensitive = MatchOptions {
            case_sensitive: true,
            ..Default::default()
        };
        assert_eq!(match_entry(&entries, "Clash", sensitive), None);
        assert_eq!(
            match_entry(&entries, "clash", sensitive),
            Some(WindowHandle(7))
        );
    }

    #[test]
    fn test_usable_title_trims_whitespace() {
        assert_eq!(usable_title("  Clash Royale  ").as_deref(), Some("Clash Royale"));
        assert_eq!(usable_title(""), None);
        assert_eq!(usable_title("   \t"), None);
    }
}
