// SPDX-License-Identifier: MPL-2.0
//! Fullscreen orchestrator sub-component.
//!
//! Two inputs drive it:
//! - orientation changes, which may force the player into fullscreen when the
//!   device turns to landscape (only while auto-fullscreen is enabled)
//! - observed bounds of the player surface, compared with the full display
//!   bounds to tell whether the presentation is currently fullscreen
//!
//! The bounds comparison is a geometric approximation of "the presentation
//! is fullscreen", not a platform fullscreen API. It is edge-triggered: only
//! actual changes are reported.
//!
//! Bounds come from two places, tracked separately: the widget's own layout
//! and the presentation surface reported by the player. The presentation is
//! fullscreen while either of them covers the display, so scrolling the list
//! under a player presented fullscreen changes nothing. The player's report
//! is forgotten when the player is released.

use crate::config::defaults::FULLSCREEN_BOUNDS_TOLERANCE;
use crate::domain::display::Orientation;
use iced::{Rectangle, Size};

/// Fullscreen orchestrator state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Follows the auto-fullscreen setting.
    enabled: bool,
    /// Last edge reported to listeners.
    is_fullscreen: bool,
    /// Whether the widget's layout covers the display.
    layout_covers: bool,
    /// Whether the player's presentation surface covers the display.
    player_covers: bool,
    /// Last orientation seen while enabled.
    orientation: Orientation,
}

/// Where observed surface bounds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Layout bounds of the widget.
    Layout,
    /// Presentation surface reported by the player.
    Player,
}

/// Messages for the fullscreen orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Auto-fullscreen toggled.
    SetEnabled(bool),
    /// The device orientation changed.
    OrientationChanged {
        orientation: Orientation,
        widget_visible: bool,
    },
    /// `source` was observed at `bounds` on a display of `display`.
    SurfaceBounds {
        source: Surface,
        bounds: Rectangle,
        display: Size,
    },
    /// The player went away along with its surface report.
    PlayerReleased,
}

/// Effects produced by the fullscreen orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Force fullscreen, report `coerce_to` as the device orientation for a
    /// moment, then restore `restore_to`.
    ForceFullscreen {
        coerce_to: Orientation,
        restore_to: Orientation,
    },
    /// The presentation entered (`true`) or left (`false`) fullscreen.
    FullscreenChanged(bool),
}

impl State {
    /// Handle a fullscreen message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetEnabled(enabled) => {
                self.enabled = enabled;
                Effect::None
            }
            Message::OrientationChanged {
                orientation,
                widget_visible,
            } => {
                if !self.enabled {
                    return Effect::None;
                }
                let previous = std::mem::replace(&mut self.orientation, orientation);
                let turned_landscape = orientation.is_landscape() && !previous.is_landscape();
                if turned_landscape && widget_visible && !self.is_fullscreen {
                    Effect::ForceFullscreen {
                        coerce_to: previous,
                        restore_to: orientation,
                    }
                } else {
                    Effect::None
                }
            }
            Message::SurfaceBounds {
                source,
                bounds,
                display,
            } => {
                let covers = covers_display(bounds, display);
                match source {
                    Surface::Layout => self.layout_covers = covers,
                    Surface::Player => self.player_covers = covers,
                }
                self.report()
            }
            Message::PlayerReleased => {
                self.player_covers = false;
                self.report()
            }
        }
    }

    /// Emits a change if the combined coverage differs from the last edge.
    fn report(&mut self) -> Effect {
        let fullscreen = self.layout_covers || self.player_covers;
        if fullscreen == self.is_fullscreen {
            return Effect::None;
        }
        self.is_fullscreen = fullscreen;
        Effect::FullscreenChanged(fullscreen)
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }
}

/// Returns true if `surface` matches the full display bounds within tolerance.
fn covers_display(surface: Rectangle, display: Size) -> bool {
    if !(display.width > 0.0 && display.height > 0.0) {
        return false;
    }
    let close = |a: f32, b: f32| (a - b).abs() <= FULLSCREEN_BOUNDS_TOLERANCE;
    close(surface.x, 0.0)
        && close(surface.y, 0.0)
        && close(surface.width, display.width)
        && close(surface.height, display.height)
}

/// Identifies a registered fullscreen listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(bool) + Send + Sync>;

/// Callbacks notified of fullscreen changes, owned by one widget and
/// dropped with it.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    /// Registers `listener`, returning the id needed to unregister it.
    pub fn subscribe(&mut self, listener: impl Fn(bool) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        if self.entries.len() == before {
            tracing::warn!("Fullscreen listener {:?} was not subscribed", id);
            return false;
        }
        true
    }

    /// Calls every listener with the new fullscreen state.
    pub fn notify(&self, fullscreen: bool) {
        for (_, listener) in &self.entries {
            listener(fullscreen);
        }
    }
}
