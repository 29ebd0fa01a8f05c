// SPDX-License-Identifier: MPL-2.0
//! Visibility monitor sub-component driving autoplay.
//!
//! While active, the monitor ticks at a low rate and compares the on-screen
//! fraction of the widget against the autoplay threshold. It is active only
//! when autoplay is enabled, the widget is attached, and the user has not
//! halted it by tapping the surface. Detaching suspends it without losing
//! any of that state.

use crate::config::defaults::{DEFAULT_MIN_VISIBILITY_RATIO, VISIBILITY_TICK_INTERVAL};
use iced::{time, Rectangle, Subscription};

/// Fraction of `bounds` that lies inside `viewport`, in `[0, 1]`.
///
/// A detached widget (`None`) or one with zero area is not visible at all.
pub fn visible_fraction(bounds: Option<Rectangle>, viewport: Rectangle) -> f32 {
    let Some(bounds) = bounds else {
        return 0.0;
    };
    let area = bounds.width * bounds.height;
    if !(area > 0.0) {
        return 0.0;
    }
    bounds
        .intersection(&viewport)
        .map_or(0.0, |visible| (visible.width * visible.height / area).clamp(0.0, 1.0))
}

/// Visibility monitor state.
#[derive(Debug, Clone)]
pub struct State {
    /// Follows the autoplay setting.
    enabled: bool,
    /// Whether the widget is part of a rendered tree.
    attached: bool,
    /// User override: polling halted until the play icon is tapped.
    halted: bool,
    /// Autoplay threshold, stored unclamped.
    min_ratio: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            enabled: false,
            attached: false,
            halted: false,
            min_ratio: DEFAULT_MIN_VISIBILITY_RATIO,
        }
    }
}

/// Messages for the visibility monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Autoplay toggled.
    SetEnabled(bool),
    /// Autoplay threshold changed.
    SetThreshold(f32),
    /// Widget entered a rendered tree.
    Attached,
    /// Widget left the rendered tree.
    Detached,
    /// User paused from the surface: stop polling.
    Halt,
    /// User pressed play: poll again.
    Resume,
    /// Periodic tick with the current measurement.
    Tick { has_source: bool, fraction: f32 },
}

/// Effects produced by the visibility monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Visible enough: request playback.
    Play,
    /// Not visible enough: request pause.
    Pause,
}

impl State {
    /// Handle a visibility monitor message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetEnabled(enabled) => {
                self.enabled = enabled;
                Effect::None
            }
            Message::SetThreshold(ratio) => {
                self.min_ratio = ratio;
                Effect::None
            }
            Message::Attached => {
                self.attached = true;
                Effect::None
            }
            Message::Detached => {
                self.attached = false;
                Effect::None
            }
            Message::Halt => {
                self.halted = true;
                Effect::None
            }
            Message::Resume => {
                self.halted = false;
                Effect::None
            }
            Message::Tick {
                has_source,
                fraction,
            } => {
                if !self.is_ticking() || !has_source {
                    return Effect::None;
                }
                if self.meets_threshold(fraction) {
                    Effect::Play
                } else {
                    Effect::Pause
                }
            }
        }
    }

    /// Returns true while ticks should be delivered.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.enabled && self.attached && !self.halted
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns true if `fraction` meets the autoplay threshold.
    #[must_use]
    pub fn meets_threshold(&self, fraction: f32) -> bool {
        fraction >= self.min_ratio
    }

    /// Tick subscription, present only while the monitor is active.
    pub fn subscription(&self) -> Subscription<()> {
        if self.is_ticking() {
            time::every(VISIBILITY_TICK_INTERVAL).map(|_| ())
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;
    use iced::{Point, Size};

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    fn active() -> State {
        let mut state = State::default();
        state.handle(Message::SetEnabled(true));
        state.handle(Message::Attached);
        state
    }

    fn tick(fraction: f32) -> Message {
        Message::Tick {
            has_source: true,
            fraction,
        }
    }

    #[test]
    fn fully_visible_widget_has_fraction_one() {
        let fraction = visible_fraction(Some(rect(0.0, 0.0, 100.0, 50.0)), rect(0.0, 0.0, 400.0, 800.0));
        assert_eq!(fraction, 1.0);
    }

    #[test]
    fn half_scrolled_widget_has_fraction_half() {
        let fraction = visible_fraction(
            Some(rect(0.0, 750.0, 100.0, 100.0)),
            rect(0.0, 0.0, 400.0, 800.0),
        );
        assert!((fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn detached_widget_has_zero_fraction() {
        assert_eq!(visible_fraction(None, rect(0.0, 0.0, 400.0, 800.0)), 0.0);
    }

    #[test]
    fn zero_area_widget_has_zero_fraction() {
        let fraction = visible_fraction(Some(rect(10.0, 10.0, 0.0, 0.0)), rect(0.0, 0.0, 400.0, 800.0));
        assert_eq!(fraction, 0.0);
        assert!(!fraction.is_nan());
    }

    #[test]
    fn offscreen_widget_has_zero_fraction() {
        let fraction = visible_fraction(
            Some(rect(0.0, 1000.0, 100.0, 100.0)),
            rect(0.0, 0.0, 400.0, 800.0),
        );
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn monitor_ticks_only_when_enabled_and_attached() {
        let mut state = State::default();
        assert!(!state.is_ticking());
        state.handle(Message::SetEnabled(true));
        assert!(!state.is_ticking());
        state.handle(Message::Attached);
        assert!(state.is_ticking());
        state.handle(Message::SetEnabled(false));
        assert!(!state.is_ticking());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let mut state = active();
        state.handle(Message::SetThreshold(0.5));
        assert_eq!(state.handle(tick(0.5)), Effect::Play);
        assert_eq!(state.handle(tick(0.49)), Effect::Pause);
    }

    #[test]
    fn tick_without_source_does_nothing() {
        let mut state = active();
        let effect = state.handle(Message::Tick {
            has_source: false,
            fraction: 1.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn halted_monitor_ignores_ticks_until_resumed() {
        let mut state = active();
        state.handle(Message::Halt);
        assert!(!state.is_ticking());
        assert_eq!(state.handle(tick(1.0)), Effect::None);

        state.handle(Message::Resume);
        assert_eq!(state.handle(tick(1.0)), Effect::Play);
    }

    #[test]
    fn detach_suspends_and_attach_resumes() {
        let mut state = active();
        state.handle(Message::Detached);
        assert!(!state.is_ticking());
        assert!(state.is_enabled());

        state.handle(Message::Attached);
        assert!(state.is_ticking());
    }

    #[test]
    fn reattach_keeps_user_halt() {
        let mut state = active();
        state.handle(Message::Halt);
        state.handle(Message::Detached);
        state.handle(Message::Attached);
        assert!(state.is_halted());
        assert!(!state.is_ticking());
    }

    #[test]
    fn threshold_is_not_clamped() {
        let mut state = active();
        state.handle(Message::SetThreshold(1.2));
        assert_eq!(state.handle(tick(1.0)), Effect::Pause);
    }

    #[test]
    fn tick_subscription_follows_activity() {
        let mut state = active();
        assert_eq!(into_recipes(state.subscription()).len(), 1);

        state.handle(Message::Halt);
        assert!(into_recipes(state.subscription()).is_empty());

        state.handle(Message::Resume);
        state.handle(Message::Detached);
        assert!(into_recipes(state.subscription()).is_empty());

        state.handle(Message::Attached);
        state.handle(Message::SetEnabled(false));
        assert!(into_recipes(state.subscription()).is_empty());
    }
}
