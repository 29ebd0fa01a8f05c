// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the player widget.
//!
//! This module serves as the single source of truth for timing constants and
//! configuration defaults. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: Autoplay threshold and monitor cadence
//! - **Fullscreen**: Orientation coercion and bounds comparison
//! - **Controls**: Custom overlay geometry

use std::time::Duration;

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Default fraction of the widget that must be on screen to autoplay.
///
/// Not clamped anywhere: callers own the `[0, 1]` range.
pub const DEFAULT_MIN_VISIBILITY_RATIO: f32 = 0.9;

/// Visibility monitor ticks per second while active.
pub const VISIBILITY_TICKS_PER_SECOND: u64 = 5;

/// Interval between two visibility monitor ticks.
pub const VISIBILITY_TICK_INTERVAL: Duration =
    Duration::from_millis(1000 / VISIBILITY_TICKS_PER_SECOND);

// ==========================================================================
// Fullscreen Defaults
// ==========================================================================

/// Delay before the overridden device orientation is restored after a
/// forced fullscreen transition.
pub const ORIENTATION_RESTORE_DELAY: Duration = Duration::from_millis(300);

/// Maximum per-edge difference (in logical pixels) for surface bounds to be
/// considered equal to the display bounds.
pub const FULLSCREEN_BOUNDS_TOLERANCE: f32 = 0.5;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Side length of the circular play icon.
pub const PLAY_ICON_SIZE: f32 = 60.0;

/// Background opacity of the play icon disc.
pub const PLAY_ICON_BACKGROUND_ALPHA: f32 = 0.55;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MIN_VISIBILITY_RATIO > 0.0);
    assert!(DEFAULT_MIN_VISIBILITY_RATIO <= 1.0);
    assert!(VISIBILITY_TICKS_PER_SECOND > 0);
    assert!(VISIBILITY_TICKS_PER_SECOND <= 1000);
    assert!(FULLSCREEN_BOUNDS_TOLERANCE >= 0.0);
    assert!(PLAY_ICON_SIZE > 0.0);
    assert!(PLAY_ICON_BACKGROUND_ALPHA >= 0.0);
    assert!(PLAY_ICON_BACKGROUND_ALPHA <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_defaults_are_valid() {
        assert_eq!(DEFAULT_MIN_VISIBILITY_RATIO, 0.9);
        assert_eq!(VISIBILITY_TICK_INTERVAL, Duration::from_millis(200));
    }

    #[test]
    fn orientation_restore_delay_is_short() {
        assert!(ORIENTATION_RESTORE_DELAY < Duration::from_secs(1));
        assert!(ORIENTATION_RESTORE_DELAY > Duration::ZERO);
    }
}
