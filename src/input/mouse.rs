//! Paced pointer sequences: moves, clicks, drags.
//!
//! Every operation here blocks the calling thread for its full real-time
//! duration. The cadence between move, press, and release is part of the
//! simulated behavior - a game may reject a drag that completes faster than
//! a human could perform it - so the waits are not shortened or batched.
//! Nothing is cancellable mid-flight; callers wanting interruption should
//! drive [`plan::drag_waypoints`] with their own loop instead.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::input::backend::{screen_size, InputBackend, MouseButton, SendInputBackend};
use crate::input::plan::{self, to_absolute};

/// Default press-hold for [`Mouse::click_at`].
pub const DEFAULT_HOLD: Duration = Duration::from_millis(50);

/// Default total duration for [`Mouse::drag`].
pub const DEFAULT_DRAG_DURATION: Duration = Duration::from_millis(500);

/// Lets an injected move register before the button event that follows it;
/// guards against event reordering in the input queue.
const MOVE_SETTLE: Duration = Duration::from_millis(20);

/// Cadence between the phases of a drag (move/down, down/first-step,
/// last-step/up).
const DRAG_SETTLE: Duration = Duration::from_millis(50);

/// Something that can wait. Production pacing sleeps the thread; tests
/// record the requested pauses instead.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Real-time pacer backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Synthesizes pointer input against the primary screen.
///
/// Owns a backend (the injection path) and a pacer (the clock). Screen
/// dimensions are sampled once at construction for the pixel-to-absolute
/// mapping.
pub struct Mouse<B = SendInputBackend, P = SleepPacer> {
    backend: B,
    pacer: P,
    screen_w: i32,
    screen_h: i32,
}

impl Mouse {
    /// A mouse driving the real OS input stream in real time.
    pub fn new() -> Result<Self> {
        let (screen_w, screen_h) = screen_size()?;
        Ok(Self::from_parts(
            SendInputBackend::new(),
            SleepPacer,
            screen_w,
            screen_h,
        ))
    }
}

impl<B: InputBackend, P: Pacer> Mouse<B, P> {
    /// Assembles a mouse from explicit parts. `screen_w`/`screen_h` must be
    /// the positive physical dimensions used for coordinate normalization.
    pub fn from_parts(backend: B, pacer: P, screen_w: i32, screen_h: i32) -> Self {
        debug_assert!(screen_w > 0 && screen_h > 0);
        Self {
            backend,
            pacer,
            screen_w,
            screen_h,
        }
    }

    /// Moves the pointer to pixel `(x, y)` on the primary screen.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.backend.move_abs(
            to_absolute(x, self.screen_w),
            to_absolute(y, self.screen_h),
        )
    }

    /// Presses `button` at the pointer's current position.
    pub fn button_down(&mut self, button: MouseButton) -> Result<()> {
        self.backend.button(button, true)
    }

    /// Releases `button` at the pointer's current position.
    pub fn button_up(&mut self, button: MouseButton) -> Result<()> {
        self.backend.button(button, false)
    }

    /// Moves to `(x, y)` and left-clicks, holding the button for `hold`.
    ///
    /// Blocks for roughly `hold` + 20 ms plus injection latency.
    pub fn click_at(&mut self, x: i32, y: i32, hold: Duration) -> Result<()> {
        debug!(x, y, ?hold, "click");
        self.move_to(x, y)?;
        self.pacer.pause(MOVE_SETTLE);
        self.button_down(MouseButton::Left)?;
        self.pacer.pause(hold);
        self.button_up(MouseButton::Left)
    }

    /// Drags from `start` to `end` over `duration` with the left button.
    ///
    /// Presses at `start`, walks the interpolated waypoint plan in real
    /// time, lands exactly on `end`, then releases. Blocks for roughly
    /// 100 ms + `duration` + 50 ms plus per-step injection overhead.
    pub fn drag(
        &mut self,
        start: (i32, i32),
        end: (i32, i32),
        duration: Duration,
    ) -> Result<()> {
        debug!(?start, ?end, ?duration, "drag");
        self.move_to(start.0, start.1)?;
        self.pacer.pause(DRAG_SETTLE);
        self.button_down(MouseButton::Left)?;
        self.pacer.pause(DRAG_SETTLE);

        for waypoint in plan::drag_waypoints(start, end, duration) {
            self.move_to(waypoint.x, waypoint.y)?;
            if !waypoint.delay.is_zero() {
                self.pacer.pause(waypoint.delay);
            }
        }

        self.pacer.pause(DRAG_SETTLE);
        self.button_up(MouseButton::Left)
    }
}
