// SPDX-License-Identifier: MPL-2.0
//! Platform media engine port.
//!
//! The widget never decodes or renders video itself. A [`MediaEngine`] opens
//! one [`MediaPlayer`] per asset; the player is commanded synchronously from
//! the UI thread and reports back through a broadcast channel of
//! [`PlayerEvent`]s.
//!
//! # Lifecycle
//!
//! 1. `MediaEngine::open()` binds a new player to the source URL
//! 2. `MediaPlayer::prepare()` asynchronously loads playability, tracks and
//!    duration
//! 3. `play()` / `pause()` / `seek_to_start()` drive playback
//! 4. Dropping the player releases it; pending `prepare()` futures should
//!    resolve to [`MediaError::Cancelled`]

use crate::domain::video::AssetInfo;
use crate::error::MediaError;
use futures_util::future::BoxFuture;
use iced::widget::image::Handle;
use iced::Rectangle;
use tokio::sync::broadcast;
use url::Url;

/// Notifications emitted by a live player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback rate changed (0.0 = paused, 1.0 = normal speed).
    RateChanged(f32),

    /// The current item played to its end.
    ReachedEnd,

    /// The presentation surface moved or resized, in logical pixels.
    SurfaceBoundsChanged(Rectangle),
}

/// Factory for players bound to a single asset.
pub trait MediaEngine: Send + Sync {
    /// Opens a player for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::InvalidSource`] when the engine cannot handle
    /// the URL at all.
    fn open(&self, source: &Url) -> Result<Box<dyn MediaPlayer>, MediaError>;
}

/// A platform player bound to one asset.
pub trait MediaPlayer: Send {
    /// Loads the asset metadata needed to start playback.
    fn prepare(&self) -> BoxFuture<'static, Result<AssetInfo, MediaError>>;

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Seeks to the very first frame with zero tolerance.
    fn seek_to_start(&mut self);

    fn set_muted(&mut self, muted: bool);

    /// Shows or hides the engine's built-in playback controls.
    fn set_native_controls(&mut self, visible: bool);

    /// Subscribes to the player's events.
    fn events(&self) -> broadcast::Receiver<PlayerEvent>;

    /// Returns the most recently rendered frame, if any.
    fn frame(&self) -> Option<Handle>;
}
