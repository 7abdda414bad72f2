//! Input-injection backends.
//!
//! The platform's raw event struct marshaling hides behind [`InputBackend`]
//! so sequencing logic can be exercised against a recording fake. The real
//! backend wraps Win32 `SendInput`, which simulates hardware-level input -
//! the only injection path games with DirectInput/RawInput layers accept
//! (window-message posting gets ignored by them).

use crate::error::Result;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Low-level synthetic pointer event sink.
///
/// Coordinates are already normalized to the OS's absolute 0-65535 space;
/// button events carry no coordinate payload and land at the pointer's
/// current position.
pub trait InputBackend {
    /// Injects an absolute pointer move.
    fn move_abs(&mut self, abs_x: i32, abs_y: i32) -> Result<()>;

    /// Injects a button press (`pressed`) or release.
    fn button(&mut self, button: MouseButton, pressed: bool) -> Result<()>;
}

/// Production backend over Win32 `SendInput`.
#[derive(Debug, Default)]
pub struct SendInputBackend;

impl SendInputBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Primary screen dimensions in physical pixels, for pixel-to-absolute
/// coordinate mapping.
pub(crate) fn screen_size() -> Result<(i32, i32)> {
    platform::screen_size()
}

#[cfg(windows)]
mod platform {
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
        MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE,
        MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEINPUT, MOUSE_EVENT_FLAGS,
    };
    use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

    use super::{InputBackend, MouseButton, SendInputBackend};
    use crate::error::{Error, Result};

    pub fn screen_size() -> Result<(i32, i32)> {
        let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        if w == 0 || h == 0 {
            return Err(Error::InjectionUnavailable(
                "GetSystemMetrics returned 0".into(),
            ));
        }
        Ok((w, h))
    }

    fn send(dx: i32, dy: i32, flags: MOUSE_EVENT_FLAGS) -> Result<()> {
        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    dwFlags: flags,
                    ..Default::default()
                },
            },
        };
        let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            return Err(Error::InjectionUnavailable("SendInput returned 0".into()));
        }
        Ok(())
    }

    impl InputBackend for SendInputBackend {
        fn move_abs(&mut self, abs_x: i32, abs_y: i32) -> Result<()> {
            send(abs_x, abs_y, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE)
        }

        fn button(&mut self, button: MouseButton, pressed: bool) -> Result<()> {
            let flags = match (button, pressed) {
                (MouseButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
                (MouseButton::Left, false) => MOUSEEVENTF_LEFTUP,
                (MouseButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
                (MouseButton::Right, false) => MOUSEEVENTF_RIGHTUP,
                (MouseButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
                (MouseButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
            };
            send(0, 0, flags)
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::{InputBackend, MouseButton, SendInputBackend};
    use crate::error::{Error, Result};

    pub fn screen_size() -> Result<(i32, i32)> {
        Err(Error::PlatformUnsupported)
    }

    impl InputBackend for SendInputBackend {
        fn move_abs(&mut self, _abs_x: i32, _abs_y: i32) -> Result<()> {
            Err(Error::PlatformUnsupported)
        }

        fn button(&mut self, _button: MouseButton, _pressed: bool) -> Result<()> {
            Err(Error::PlatformUnsupported)
        }
    }
}
