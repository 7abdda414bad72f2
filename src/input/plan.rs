//! Pure input math: absolute-coordinate mapping and drag waypoint plans.
//!
//! Kept free of OS calls and clocks so the sequencing is testable without a
//! desktop session. [`crate::input::Mouse`] executes these plans against a
//! real backend and pacer.

use std::time::Duration;

/// One step of a drag: a pixel position to move to, then a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub x: i32,
    pub y: i32,
    pub delay: Duration,
}

/// Maps a pixel coordinate to the injection API's normalized 0-65535 range.
///
/// `round(px * 65535 / dim)`, computed per axis against the screen width or
/// height. Monotonic; pixel 0 maps to 0 and pixel `dim - 1` lands within a
/// pixel's worth of 65535.
pub fn to_absolute(px: i32, dim: i32) -> i32 {
    debug_assert!(dim > 0);
    (px as f64 * 65535.0 / dim as f64).round() as i32
}

/// Computes the move/pause sequence for a drag from `start` to `end`.
///
/// `steps = max(10, round(duration * 60))` equal time slices, targeting
/// roughly 60 updates per second. Step `i` lands at `t = (i + 1) / steps`
/// along the line, truncated toward zero, followed by a `duration / steps`
/// pause. A final zero-delay waypoint repeats the exact end point so
/// truncation drift never changes where the drag lands - this holds even
/// for a zero-displacement drag, which still produces the full plan.
pub fn drag_waypoints(start: (i32, i32), end: (i32, i32), duration: Duration) -> Vec<Waypoint> {
    let steps = (duration.as_secs_f64() * 60.0).round().max(10.0) as u32;
    let step_delay = duration / steps;

    let dx = (end.0 - start.0) as f64;
    let dy = (end.1 - start.1) as f64;

    let mut waypoints = Vec::with_capacity(steps as usize + 1);
    for i in 0..steps {
        let t = (i + 1) as f64 / steps as f64;
        waypoints.push(Waypoint {
            x: (start.0 as f64 + dx * t) as i32,
            y: (start.1 as f64 + dy * t) as i32,
            delay: step_delay,
        });
    }
    waypoints.push(Waypoint {
        x: end.0,
        y: end.1,
        delay: Duration::ZERO,
    });
    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_boundaries() {
        assert_eq!(to_absolute(0, 1920), 0);
        assert_eq!(to_absolute(0, 1080), 0);
        // Last addressable pixel maps near, but not past, 65535.
        let x = to_absolute(1919, 1920);
        assert!((65490..=65535).contains(&x), "got {x}");
        let y = to_absolute(1079, 1080);
        assert!((65470..=65535).contains(&y), "got {y}");
    }

    #[test]
    fn test_absolute_is_monotonic() {
        let mut prev = to_absolute(0, 1920);
        for px in 1..1920 {
            let cur = to_absolute(px, 1920);
            assert!(cur >= prev, "not monotonic at {px}");
            prev = cur;
        }
    }

    #[test]
    fn test_drag_step_count_tracks_duration() {
        // 500 ms at 60 Hz -> 30 steps plus the corrective waypoint.
        let plan = drag_waypoints((0, 0), (100, 100), Duration::from_millis(500));
        assert_eq!(plan.len(), 31);
        // 2 s -> 120 steps.
        let plan = drag_waypoints((0, 0), (100, 100), Duration::from_secs(2));
        assert_eq!(plan.len(), 121);
    }

    #[test]
    fn test_drag_step_count_floors_at_ten() {
        let plan = drag_waypoints((0, 0), (5, 5), Duration::from_millis(50));
        assert_eq!(plan.len(), 11);
    }

    #[test]
    fn test_drag_lands_exactly_on_end() {
        let plan = drag_waypoints((3, 7), (100, 41), Duration::from_millis(500));
        let last = plan.last().unwrap();
        assert_eq!((last.x, last.y), (100, 41));
        assert_eq!(last.delay, Duration::ZERO);
    }

    #[test]
    fn test_drag_delays_sum_to_duration() {
        let duration = Duration::from_millis(500);
        let plan = drag_waypoints((0, 0), (10, 10), duration);
        let total: Duration = plan.iter().map(|w| w.delay).sum();
        // Duration division truncates nanoseconds; the loss across a plan is
        // far below a millisecond.
        let drift = duration.checked_sub(total).unwrap();
        assert!(drift < Duration::from_millis(1), "drift {drift:?}");
    }

    #[test]
    fn test_zero_displacement_drag_still_has_full_plan() {
        let plan = drag_waypoints((50, 60), (50, 60), Duration::from_millis(500));
        assert_eq!(plan.len(), 31);
        assert!(plan.iter().all(|w| (w.x, w.y) == (50, 60)));
    }

    #[test]
    fn test_interpolation_truncates_toward_zero() {
        // First of 30 steps over 500 ms: t = 1/30, 100 * t = 3.33 -> 3.
        let plan = drag_waypoints((0, 0), (100, 0), Duration::from_millis(500));
        assert_eq!(plan[0].x, 3);
        // Negative direction truncates toward zero as well: -3.33 -> -3.
        let plan = drag_waypoints((0, 0), (-100, 0), Duration::from_millis(500));
        assert_eq!(plan[0].x, -3);
    }
}
