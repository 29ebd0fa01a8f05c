// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the player widget.
//!
//! Owns the platform player and reconciles the optimistic playback intent with
//! what the player has actually been told to do:
//! - `play()` marks the desired intent immediately and asks for the asset to
//!   be prepared
//! - `complete_prepare()` commits only if playing is still desired
//! - `pause()` takes effect at once and overrides any pending `play()`

use crate::application::port::{MediaEngine, MediaPlayer, PlayerEvent};
use crate::domain::video::{AssetInfo, Intent, IntentPair, SessionId};
use crate::error::MediaError;
use futures_util::future::BoxFuture;
use iced::widget::image::Handle;
use tokio::sync::broadcast;
use url::Url;

/// Outcome of a controller operation, for the component to act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// A new player was opened for the given session.
    Opened(SessionId),
    /// The player and asset were released.
    Released,
    /// Playing is desired: run the asset preparation of this session.
    Prepare(SessionId),
    /// The player was commanded to play after preparation.
    Committed,
    /// The player was paused.
    Paused,
    /// Playback genuinely started (nonzero rate observed).
    PlaybackStarted,
    /// Playback looped back to the start.
    Restarted,
}

/// Controller owning the platform player of one widget.
pub struct PlaybackController {
    /// Player bound to the current asset, if a source is set and opened.
    player: Option<Box<dyn MediaPlayer>>,

    /// Session of the current player.
    session: Option<SessionId>,

    /// Desired and committed intents.
    intent: IntentPair,

    /// Whether the current asset finished preparing.
    has_loaded_asset: bool,

    /// Whether the current asset failed to prepare. Cleared with the player.
    asset_failed: bool,

    /// Whether the end-of-playback handler loops.
    auto_repeat: bool,

    /// Whether the player's built-in controls are shown. Survives player
    /// replacement.
    native_controls: bool,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("has_player", &self.player.is_some())
            .field("session", &self.session)
            .field("intent", &self.intent)
            .field("has_loaded_asset", &self.has_loaded_asset)
            .field("asset_failed", &self.asset_failed)
            .field("auto_repeat", &self.auto_repeat)
            .field("native_controls", &self.native_controls)
            .finish()
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    /// Creates a controller without a player.
    pub fn new() -> Self {
        Self {
            player: None,
            session: None,
            intent: IntentPair::default(),
            has_loaded_asset: false,
            asset_failed: false,
            auto_repeat: false,
            native_controls: false,
        }
    }

    /// Replaces the player with one bound to `source`, or releases it when
    /// `source` is `None`.
    ///
    /// An engine refusing the source leaves the controller inert; `play()` and
    /// `pause()` then do nothing.
    pub fn set_video_source(&mut self, engine: &dyn MediaEngine, source: Option<&Url>) -> Effect {
        self.release();

        let Some(source) = source else {
            return Effect::Released;
        };

        match engine.open(source) {
            Ok(mut player) => {
                player.set_native_controls(self.native_controls);
                let session = SessionId::next();
                tracing::debug!("Opened player session {} for {}", session.value(), source);
                self.player = Some(player);
                self.session = Some(session);
                Effect::Opened(session)
            }
            Err(err) => {
                tracing::warn!("Cannot open video source {}: {}", source, err);
                Effect::Released
            }
        }
    }

    /// Drops the player and resets intent.
    fn release(&mut self) {
        if let Some(mut player) = self.player.take() {
            player.pause();
        }
        self.session = None;
        self.intent = IntentPair::default();
        self.has_loaded_asset = false;
        self.asset_failed = false;
    }

    /// Requests playback.
    ///
    /// State transitions:
    /// - desired Paused → desired Playing, returns `Prepare`
    /// - desired Playing → no change (idempotent)
    ///
    /// An asset that failed to prepare is not retried until the source
    /// changes.
    pub fn play(&mut self) -> Effect {
        let Some(session) = self.session else {
            return Effect::None;
        };
        if self.asset_failed || self.intent.desired.is_playing() {
            return Effect::None;
        }
        self.intent.desired = Intent::Playing;
        Effect::Prepare(session)
    }

    /// Pauses playback, overriding a pending `play()`.
    ///
    /// State transitions:
    /// - desired Playing → Paused/Paused, returns `Paused`
    /// - desired Paused → no change (idempotent)
    pub fn pause(&mut self) -> Effect {
        if !self.intent.desired.is_playing() {
            return Effect::None;
        }
        self.intent = IntentPair {
            desired: Intent::Paused,
            committed: Intent::Paused,
        };
        if let Some(player) = &mut self.player {
            player.pause();
        }
        Effect::Paused
    }

    /// Returns the preparation future of `session`, if it is still current.
    pub fn prepare(
        &self,
        session: SessionId,
    ) -> Option<BoxFuture<'static, Result<AssetInfo, MediaError>>> {
        if self.session != Some(session) {
            return None;
        }
        self.player.as_ref().map(|player| player.prepare())
    }

    /// Reconciles intent once the asset preparation of `session` resolved.
    ///
    /// Commits only when playing is still desired; failures abandon the
    /// pending intent without retrying.
    pub fn complete_prepare(
        &mut self,
        session: SessionId,
        result: Result<AssetInfo, MediaError>,
    ) -> Effect {
        if self.session != Some(session) {
            tracing::debug!("Ignoring preparation of stale session {}", session.value());
            return Effect::None;
        }

        match result {
            Ok(info) if info.is_playable() => {
                self.has_loaded_asset = true;
                if !self.intent.is_pending() {
                    return Effect::None;
                }
                if let Some(player) = &mut self.player {
                    player.play();
                }
                self.intent.committed = Intent::Playing;
                Effect::Committed
            }
            Ok(info) => {
                tracing::debug!("Asset of session {} is not playable: {:?}", session.value(), info);
                self.asset_failed = true;
                self.abandon_pending();
                Effect::None
            }
            Err(err) => {
                tracing::debug!("Preparing session {} failed: {}", session.value(), err);
                // A cancelled preparation says nothing about the asset.
                self.asset_failed = !err.is_cancellation();
                self.abandon_pending();
                Effect::None
            }
        }
    }

    fn abandon_pending(&mut self) {
        if self.intent.is_pending() {
            self.intent.desired = Intent::Paused;
        }
    }

    /// Forwards the mute flag to the live player. Nothing is remembered for
    /// players opened later.
    pub fn set_muted(&mut self, muted: bool) {
        if let Some(player) = &mut self.player {
            player.set_muted(muted);
        }
    }

    /// Shows or hides the player's built-in controls.
    pub fn set_native_controls(&mut self, visible: bool) {
        self.native_controls = visible;
        if let Some(player) = &mut self.player {
            player.set_native_controls(visible);
        }
    }

    /// Enables or disables looping at the end of playback.
    pub fn set_auto_repeat(&mut self, enabled: bool) {
        self.auto_repeat = enabled;
    }

    /// Handles an observed playback rate.
    pub fn on_rate_changed(&mut self, rate: f32) -> Effect {
        if rate > 0.0 && self.player.is_some() {
            Effect::PlaybackStarted
        } else {
            Effect::None
        }
    }

    /// Handles the end of the current item.
    pub fn on_playback_finished(&mut self) -> Effect {
        if !self.auto_repeat || !self.intent.desired.is_playing() {
            return Effect::None;
        }
        let Some(player) = &mut self.player else {
            return Effect::None;
        };
        player.seek_to_start();
        player.play();
        Effect::Restarted
    }

    /// Routes a player event to the matching handler.
    ///
    /// Surface bounds are not the controller's concern and yield `None`.
    pub fn on_player_event(&mut self, event: &PlayerEvent) -> Effect {
        match event {
            PlayerEvent::RateChanged(rate) => self.on_rate_changed(*rate),
            PlayerEvent::ReachedEnd => self.on_playback_finished(),
            PlayerEvent::SurfaceBoundsChanged(_) => Effect::None,
        }
    }

    /// Returns the desired and committed intents.
    pub fn intent(&self) -> IntentPair {
        self.intent
    }

    /// Returns true if playing is desired.
    pub fn is_playing(&self) -> bool {
        self.intent.desired.is_playing()
    }

    pub fn has_player(&self) -> bool {
        self.player.is_some()
    }

    pub fn has_loaded_asset(&self) -> bool {
        self.has_loaded_asset
    }

    /// Returns the session of the current player.
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Returns the last frame rendered by the player.
    pub fn frame(&self) -> Option<Handle> {
        self.player.as_ref().and_then(|player| player.frame())
    }

    /// Subscribes to the current player's events.
    pub fn events(&self) -> Option<(SessionId, broadcast::Receiver<PlayerEvent>)> {
        let session = self.session?;
        self.player
            .as_ref()
            .map(|player| (session, player.events()))
    }
}
