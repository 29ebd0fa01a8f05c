// SPDX-License-Identifier: MPL-2.0
//! Gesture layer sub-component: preview image, play icon and tap target.
//!
//! The layer never touches playback state. Taps become effects that the
//! component routes to the playback controller and the visibility monitor;
//! the controller's outcomes come back as visibility updates.

use iced::widget::image::Handle;

/// Gesture layer state.
#[derive(Debug, Clone)]
pub struct State {
    /// Custom controls shown instead of the player's native ones.
    custom_controls: bool,
    /// Whether the circular play icon is shown.
    play_icon_visible: bool,
    /// Whether the preview image (or its placeholder) covers the surface.
    preview_visible: bool,
    /// Loaded preview image; `None` renders the transparent placeholder.
    preview: Option<Handle>,
    /// Bumped on every preview source change to drop stale loads.
    preview_generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            custom_controls: true,
            play_icon_visible: true,
            preview_visible: true,
            preview: None,
            preview_generation: 0,
        }
    }
}

/// Messages for the gesture layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// The play icon was tapped.
    PlayIconTapped,
    /// The surface outside the play icon was tapped.
    SurfaceTapped,
}

/// Effects produced by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Resume visibility polling and request playback.
    ResumeAndPlay,
    /// Halt visibility polling and pause.
    HaltAndPause,
}

impl State {
    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PlayIconTapped => Effect::ResumeAndPlay,
            Message::SurfaceTapped => {
                if self.custom_controls {
                    Effect::HaltAndPause
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Switches between custom and native controls.
    pub fn set_custom_controls(&mut self, enabled: bool) {
        self.custom_controls = enabled;
    }

    /// Starts showing a new preview source with the transparent placeholder.
    ///
    /// Returns the generation the pending load must carry.
    pub fn begin_preview(&mut self) -> u64 {
        self.preview_generation += 1;
        self.preview = None;
        self.preview_visible = true;
        self.preview_generation
    }

    /// Stores a loaded preview unless a newer source superseded it.
    pub fn finish_preview(&mut self, generation: u64, handle: Handle) -> bool {
        if generation != self.preview_generation {
            return false;
        }
        self.preview = Some(handle);
        true
    }

    /// Playback was committed: uncover the video.
    pub fn on_committed(&mut self) {
        self.play_icon_visible = false;
        self.preview_visible = false;
    }

    /// Playback was paused: offer the play icon again.
    pub fn on_paused(&mut self) {
        self.play_icon_visible = true;
    }

    /// A nonzero playback rate was observed: a frame is on screen.
    pub fn on_playback_started(&mut self) {
        self.preview_visible = false;
    }

    /// A new video source was set: nothing has been rendered for it yet.
    pub fn on_source_changed(&mut self) {
        self.play_icon_visible = true;
        self.preview_visible = true;
    }

    #[must_use]
    pub fn custom_controls(&self) -> bool {
        self.custom_controls
    }

    #[must_use]
    pub fn play_icon_visible(&self) -> bool {
        self.play_icon_visible
    }

    #[must_use]
    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn initial_state_shows_icon_and_preview() {
        let state = State::default();
        assert!(state.custom_controls());
        assert!(state.play_icon_visible());
        assert!(state.preview_visible());
        assert!(state.preview().is_none());
    }

    #[test]
    fn play_icon_tap_resumes_and_plays() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::PlayIconTapped), Effect::ResumeAndPlay);
    }

    #[test]
    fn surface_tap_halts_only_with_custom_controls() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::SurfaceTapped), Effect::HaltAndPause);

        state.set_custom_controls(false);
        assert_eq!(state.handle(Message::SurfaceTapped), Effect::None);
    }

    #[test]
    fn commit_hides_icon_and_preview_pause_restores_icon() {
        let mut state = State::default();
        state.on_committed();
        assert!(!state.play_icon_visible());
        assert!(!state.preview_visible());

        state.on_paused();
        assert!(state.play_icon_visible());
        assert!(!state.preview_visible());
    }

    #[test]
    fn playback_start_hides_preview_only() {
        let mut state = State::default();
        state.on_playback_started();
        assert!(!state.preview_visible());
        assert!(state.play_icon_visible());
    }

    #[test]
    fn new_video_source_covers_surface_again() {
        let mut state = State::default();
        state.on_committed();
        state.on_playback_started();

        state.on_source_changed();
        assert!(state.play_icon_visible());
        assert!(state.preview_visible());
    }

    #[test]
    fn new_preview_source_shows_placeholder() {
        let mut state = State::default();
        let first = state.begin_preview();
        assert!(state.finish_preview(first, handle()));
        state.on_committed();

        let second = state.begin_preview();
        assert!(state.preview_visible());
        assert!(state.preview().is_none());
        assert!(!state.finish_preview(first, handle()));
        assert!(state.finish_preview(second, handle()));
        assert!(state.preview().is_some());
    }
}
