// SPDX-License-Identifier: MPL-2.0
//! Video player widget: the top-level component.
//!
//! The component owns the playback controller and the three sub-components
//! (visibility monitor, gesture layer, fullscreen orchestrator). It routes
//! their effects into each other and turns the asynchronous parts (asset
//! preparation, preview loading, orientation restore) into Iced tasks.

use super::{fullscreen, gestures, visibility};
use crate::application::port::{FullscreenCapability, ImageLoader, MediaEngine, PlayerEvent};
use crate::config::defaults::{ORIENTATION_RESTORE_DELAY, PLAY_ICON_SIZE};
use crate::config::{ConfigChange, PlayerConfig};
use crate::domain::display::Orientation;
use crate::domain::video::{AssetInfo, PlaybackState, SessionId};
use crate::error::{Error, MediaError};
use crate::infrastructure::{HttpImageLoader, NoFullscreen};
use crate::ui::styles;
use crate::ui::widgets::{visibility_probe, Geometry, ProbeEvent};
use crate::video_player::{self, PlaybackController};
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Space, Stack};
use iced::{ContentFit, Element, Length, Size, Subscription, Task};
use std::sync::Arc;

/// Messages handled by the player widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the whole configuration; only changed fields take effect.
    Configure(PlayerConfig),
    /// Change a single configuration field.
    Apply(ConfigChange),
    /// The widget entered a rendered tree.
    Attached,
    /// The widget left the rendered tree.
    Detached,
    /// Geometry reported by the visibility probe.
    Probe(ProbeEvent),
    /// Device orientation pushed by the host.
    OrientationChanged(Orientation),
    VisibilityTick,
    Gesture(gestures::Message),
    AssetPrepared {
        session: SessionId,
        result: Result<AssetInfo, MediaError>,
    },
    Player {
        session: SessionId,
        event: PlayerEvent,
    },
    PreviewLoaded {
        generation: u64,
        result: Result<Handle, Error>,
    },
    /// End of the orientation override that follows a forced fullscreen.
    RestoreOrientation(Orientation),
}

/// Effects propagated to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The presentation entered or left fullscreen.
    FullscreenChanged(bool),
}

/// Player widget state.
pub struct State {
    engine: Arc<dyn MediaEngine>,
    image_loader: Arc<dyn ImageLoader>,
    fullscreen_capability: Arc<dyn FullscreenCapability>,
    config: PlayerConfig,
    controller: PlaybackController,
    monitor: visibility::State,
    gestures: gestures::State,
    fullscreen: fullscreen::State,
    /// Last geometry reported by the probe, `None` while detached.
    geometry: Option<Geometry>,
    /// Size of the display hosting the widget, once known.
    display: Option<Size>,
    listeners: fullscreen::Listeners,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("monitor", &self.monitor)
            .field("gestures", &self.gestures)
            .field("fullscreen", &self.fullscreen)
            .field("geometry", &self.geometry)
            .field("display", &self.display)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates a widget playing media opened by `engine`.
    ///
    /// Previews are fetched with [`HttpImageLoader`]; forced fullscreen is
    /// unavailable until [`State::with_fullscreen`] provides it.
    pub fn new(engine: Arc<dyn MediaEngine>) -> Self {
        Self {
            engine,
            image_loader: Arc::new(HttpImageLoader::default()),
            fullscreen_capability: Arc::new(NoFullscreen),
            config: PlayerConfig::default(),
            controller: PlaybackController::new(),
            monitor: visibility::State::default(),
            gestures: gestures::State::default(),
            fullscreen: fullscreen::State::default(),
            geometry: None,
            display: None,
            listeners: fullscreen::Listeners::default(),
        }
    }

    #[must_use]
    pub fn with_image_loader(mut self, loader: Arc<dyn ImageLoader>) -> Self {
        self.image_loader = loader;
        self
    }

    #[must_use]
    pub fn with_fullscreen(mut self, capability: Arc<dyn FullscreenCapability>) -> Self {
        self.fullscreen_capability = capability;
        self
    }

    /// Applies every field of `config` that differs from the current one.
    ///
    /// The video source goes first so that settings forwarded to the player
    /// in the same call reach the new one.
    pub fn configure(&mut self, config: PlayerConfig) -> (PlaybackState, Task<Message>) {
        let tasks: Vec<_> = self
            .config
            .diff(&config)
            .into_iter()
            .map(|change| self.apply_change(change))
            .collect();
        (self.playback_state(), Task::batch(tasks))
    }

    /// Applies a single configuration change.
    pub fn apply(&mut self, change: ConfigChange) -> (PlaybackState, Task<Message>) {
        let task = self.apply_change(change);
        (self.playback_state(), task)
    }

    fn apply_change(&mut self, change: ConfigChange) -> Task<Message> {
        if !self.config.record(&change) {
            return Task::none();
        }
        match change {
            ConfigChange::VideoSource(source) => {
                // A halt belongs to the clip the user tapped on.
                self.monitor.handle(visibility::Message::Resume);
                let effect = self
                    .controller
                    .set_video_source(self.engine.as_ref(), source.as_ref());
                self.route_playback(effect)
            }
            ConfigChange::PreviewImageSource(source) => {
                let generation = self.gestures.begin_preview();
                match source {
                    Some(url) => Task::perform(self.image_loader.load(&url), move |result| {
                        Message::PreviewLoaded { generation, result }
                    }),
                    None => Task::none(),
                }
            }
            ConfigChange::Autoplay(enabled) => {
                self.monitor.handle(visibility::Message::SetEnabled(enabled));
                Task::none()
            }
            ConfigChange::AutoRepeat(enabled) => {
                self.controller.set_auto_repeat(enabled);
                Task::none()
            }
            ConfigChange::CustomControls(enabled) => {
                self.gestures.set_custom_controls(enabled);
                self.controller.set_native_controls(!enabled);
                Task::none()
            }
            ConfigChange::MinVisibilityRatio(ratio) => {
                self.monitor.handle(visibility::Message::SetThreshold(ratio));
                Task::none()
            }
            ConfigChange::Muted(muted) => {
                self.controller.set_muted(muted);
                Task::none()
            }
            ConfigChange::AutoFullscreen(enabled) => {
                self.fullscreen
                    .handle(fullscreen::Message::SetEnabled(enabled));
                Task::none()
            }
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Configure(config) => {
                let (_, task) = self.configure(config);
                (Effect::None, task)
            }
            Message::Apply(change) => {
                let (_, task) = self.apply(change);
                (Effect::None, task)
            }
            Message::Attached => {
                self.monitor.handle(visibility::Message::Attached);
                (Effect::None, Task::none())
            }
            Message::Detached => {
                self.detach();
                (Effect::None, Task::none())
            }
            Message::Probe(ProbeEvent::Layout(geometry)) => {
                if !self.monitor.is_attached() {
                    self.monitor.handle(visibility::Message::Attached);
                }
                self.geometry = Some(geometry);
                self.observe_surface(fullscreen::Surface::Layout, geometry.bounds)
            }
            Message::Probe(ProbeEvent::DisplayResized(size)) => {
                let first_report = self.display.replace(size).is_none();
                let orientation = Orientation::from_dimensions(size.width, size.height);
                // The first size only seeds the orientation.
                let (effect, task) = self.change_orientation(orientation, !first_report);
                match self.geometry {
                    Some(geometry) if effect == Effect::None => {
                        let (effect, surface_task) =
                            self.observe_surface(fullscreen::Surface::Layout, geometry.bounds);
                        (effect, Task::batch([task, surface_task]))
                    }
                    _ => (effect, task),
                }
            }
            Message::OrientationChanged(orientation) => {
                self.change_orientation(orientation, true)
            }
            Message::VisibilityTick => {
                let effect = self.monitor.handle(visibility::Message::Tick {
                    has_source: self.config.video_source.is_some(),
                    fraction: self.visible_fraction(),
                });
                let task = match effect {
                    visibility::Effect::Play => self.play(),
                    visibility::Effect::Pause => self.pause(),
                    visibility::Effect::None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::Gesture(msg) => {
                let task = match self.gestures.handle(msg) {
                    gestures::Effect::ResumeAndPlay => {
                        self.monitor.handle(visibility::Message::Resume);
                        self.play()
                    }
                    gestures::Effect::HaltAndPause => {
                        let task = self.pause();
                        self.monitor.handle(visibility::Message::Halt);
                        task
                    }
                    gestures::Effect::None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::AssetPrepared { session, result } => {
                let effect = self.controller.complete_prepare(session, result);
                (Effect::None, self.route_playback(effect))
            }
            Message::Player { session, event } => {
                if self.controller.session() != Some(session) {
                    return (Effect::None, Task::none());
                }
                if let PlayerEvent::SurfaceBoundsChanged(bounds) = event {
                    return self.observe_surface(fullscreen::Surface::Player, bounds);
                }
                let effect = self.controller.on_player_event(&event);
                (Effect::None, self.route_playback(effect))
            }
            Message::PreviewLoaded { generation, result } => {
                match result {
                    Ok(handle) => {
                        if !self.gestures.finish_preview(generation, handle) {
                            tracing::debug!("Dropping superseded preview {}", generation);
                        }
                    }
                    Err(err) => tracing::warn!("Failed to load preview image: {}", err),
                }
                (Effect::None, Task::none())
            }
            Message::RestoreOrientation(orientation) => (
                Effect::None,
                self.fullscreen_capability
                    .restore_orientation(orientation)
                    .discard(),
            ),
        }
    }

    fn play(&mut self) -> Task<Message> {
        let effect = self.controller.play();
        self.route_playback(effect)
    }

    fn pause(&mut self) -> Task<Message> {
        let effect = self.controller.pause();
        self.route_playback(effect)
    }

    /// Suspends the monitor and pauses playback.
    fn detach(&mut self) {
        self.monitor.handle(visibility::Message::Detached);
        self.geometry = None;
        if self.controller.pause() == video_player::Effect::Paused {
            self.gestures.on_paused();
        }
    }

    fn route_playback(&mut self, effect: video_player::Effect) -> Task<Message> {
        match effect {
            video_player::Effect::Prepare(session) => match self.controller.prepare(session) {
                Some(preparation) => Task::perform(preparation, move |result| {
                    Message::AssetPrepared { session, result }
                }),
                None => Task::none(),
            },
            video_player::Effect::Committed => {
                self.gestures.on_committed();
                Task::none()
            }
            video_player::Effect::Paused => {
                self.gestures.on_paused();
                Task::none()
            }
            video_player::Effect::PlaybackStarted => {
                self.gestures.on_playback_started();
                Task::none()
            }
            video_player::Effect::Opened(_) | video_player::Effect::Released => {
                self.gestures.on_source_changed();
                // The outgoing player's surface no longer counts.
                let effect = self.fullscreen.handle(fullscreen::Message::PlayerReleased);
                let (_, task) = self.route_fullscreen(effect);
                task
            }
            video_player::Effect::Restarted | video_player::Effect::None => Task::none(),
        }
    }

    fn change_orientation(
        &mut self,
        orientation: Orientation,
        may_force: bool,
    ) -> (Effect, Task<Message>) {
        let widget_visible = may_force && self.monitor.meets_threshold(self.visible_fraction());
        let effect = self.fullscreen.handle(fullscreen::Message::OrientationChanged {
            orientation,
            widget_visible,
        });
        self.route_fullscreen(effect)
    }

    fn observe_surface(
        &mut self,
        source: fullscreen::Surface,
        bounds: iced::Rectangle,
    ) -> (Effect, Task<Message>) {
        let Some(display) = self.display else {
            return (Effect::None, Task::none());
        };
        let effect = self.fullscreen.handle(fullscreen::Message::SurfaceBounds {
            source,
            bounds,
            display,
        });
        self.route_fullscreen(effect)
    }

    fn route_fullscreen(&mut self, effect: fullscreen::Effect) -> (Effect, Task<Message>) {
        match effect {
            fullscreen::Effect::None => (Effect::None, Task::none()),
            fullscreen::Effect::ForceFullscreen {
                coerce_to,
                restore_to,
            } => {
                let capability = &self.fullscreen_capability;
                if !capability.is_available() {
                    tracing::debug!("Forced fullscreen is not available on this platform");
                    return (Effect::None, Task::none());
                }
                let restore = Task::perform(
                    async { tokio::time::sleep(ORIENTATION_RESTORE_DELAY).await },
                    move |()| Message::RestoreOrientation(restore_to),
                );
                let task = Task::batch([
                    capability.enter_fullscreen().discard(),
                    capability.override_orientation(coerce_to).discard(),
                    restore,
                ]);
                (Effect::None, task)
            }
            fullscreen::Effect::FullscreenChanged(is_fullscreen) => {
                self.listeners.notify(is_fullscreen);
                (Effect::FullscreenChanged(is_fullscreen), Task::none())
            }
        }
    }

    fn visible_fraction(&self) -> f32 {
        match self.geometry {
            Some(geometry) => visibility::visible_fraction(Some(geometry.bounds), geometry.viewport),
            None => 0.0,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let surface: Element<'_, Message> = match self.controller.frame() {
            Some(frame) => image(frame)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };
        let mut stack = Stack::new().push(
            container(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::surface),
        );

        if self.gestures.preview_visible() {
            let preview: Element<'_, Message> = match self.gestures.preview() {
                Some(handle) => image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into(),
                // Transparent placeholder while loading
                None => Space::new().width(Length::Fill).height(Length::Fill).into(),
            };
            stack = stack.push(preview);
        }

        if self.gestures.custom_controls() {
            let icon: Element<'_, Message> = if self.gestures.play_icon_visible() {
                let disc = container(text("▶").size(PLAY_ICON_SIZE / 2.0))
                    .center(Length::Fixed(PLAY_ICON_SIZE))
                    .style(styles::overlay::play_icon);
                mouse_area(disc)
                    .on_press(Message::Gesture(gestures::Message::PlayIconTapped))
                    .into()
            } else {
                Space::new().into()
            };
            // Presses inside the icon are captured before the surface sees them.
            let tap_target = mouse_area(container(icon).center(Length::Fill))
                .on_press(Message::Gesture(gestures::Message::SurfaceTapped));
            stack = stack.push(tap_target);
        }

        visibility_probe(
            stack.width(Length::Fill).height(Length::Fill),
            Message::Probe,
        )
        .into()
    }

    /// Visibility ticks while the monitor is active, plus the events of the
    /// current player session.
    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = self.monitor.subscription().map(|()| Message::VisibilityTick);
        let events = match self.controller.events() {
            Some((session, receiver)) => video_player::player_events(session, receiver)
                .map(|(session, event)| Message::Player { session, event }),
            None => Subscription::none(),
        };
        Subscription::batch([ticks, events])
    }

    /// Snapshot of the intent, fullscreen and asset flags.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.controller.is_playing(),
            is_fullscreen: self.fullscreen.is_fullscreen(),
            has_loaded_asset: self.controller.has_loaded_asset(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Session of the current player, if a video source is loaded.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.controller.session()
    }

    #[must_use]
    pub fn is_play_icon_visible(&self) -> bool {
        self.gestures.custom_controls() && self.gestures.play_icon_visible()
    }

    #[must_use]
    pub fn is_preview_visible(&self) -> bool {
        self.gestures.preview_visible()
    }

    #[must_use]
    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_ticking()
    }

    /// Registers a callback run on every fullscreen change.
    pub fn subscribe_fullscreen(
        &mut self,
        listener: impl Fn(bool) + Send + Sync + 'static,
    ) -> fullscreen::ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe_fullscreen(&mut self, id: fullscreen::ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
