// SPDX-License-Identifier: MPL-2.0
//! In-memory platform doubles for tests.
//!
//! [`FakeEngine`] opens [`FakePlayer`]s that record every command in a shared
//! log, resolve `prepare()` immediately with a configurable result and
//! broadcast whatever events the test emits. [`FakeFullscreen`] records the
//! fullscreen requests it receives.

use crate::application::port::{FullscreenCapability, MediaEngine, MediaPlayer, PlayerEvent};
use crate::domain::display::Orientation;
use crate::domain::video::AssetInfo;
use crate::error::MediaError;
use futures_util::future::{self, BoxFuture, FutureExt};
use iced::widget::image::Handle;
use iced::Task;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use url::Url;

/// A command received by a fake player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCall {
    /// Asset preparation was requested.
    Prepare,
    Play,
    Pause,
    SeekToStart,
    SetMuted(bool),
    SetNativeControls(bool),
    /// The player was dropped.
    Released,
}

#[derive(Debug)]
struct Shared {
    calls: Vec<PlayerCall>,
    opened: Vec<Url>,
    prepare_result: Result<AssetInfo, MediaError>,
    reject_sources: bool,
}

/// Media engine double shared between a test and the code under test.
#[derive(Debug, Clone)]
pub struct FakeEngine {
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<PlayerEvent>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeEngine {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                calls: Vec::new(),
                opened: Vec::new(),
                prepare_result: Ok(Self::playable_asset()),
                reject_sources: false,
            })),
            events,
        }
    }

    /// Asset metadata of a short, playable clip.
    pub fn playable_asset() -> AssetInfo {
        AssetInfo {
            playable: true,
            track_count: 2,
            duration: Some(Duration::from_secs(12)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes `open()` fail with [`MediaError::InvalidSource`].
    pub fn reject_sources(&self, reject: bool) {
        self.lock().reject_sources = reject;
    }

    /// Sets what subsequent `prepare()` calls resolve to.
    pub fn set_prepare_result(&self, result: Result<AssetInfo, MediaError>) {
        self.lock().prepare_result = result;
    }

    /// Every command received so far, across players.
    pub fn calls(&self) -> Vec<PlayerCall> {
        self.lock().calls.clone()
    }

    /// Number of times `call` was received.
    pub fn count(&self, call: &PlayerCall) -> usize {
        self.lock().calls.iter().filter(|c| *c == call).count()
    }

    /// Sources opened so far, in order.
    pub fn opened(&self) -> Vec<Url> {
        self.lock().opened.clone()
    }

    /// Broadcasts an event to every subscriber of every player.
    pub fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}

impl MediaEngine for FakeEngine {
    fn open(&self, source: &Url) -> Result<Box<dyn MediaPlayer>, MediaError> {
        let mut shared = self.lock();
        if shared.reject_sources {
            return Err(MediaError::InvalidSource(source.to_string()));
        }
        shared.opened.push(source.clone());
        Ok(Box::new(FakePlayer {
            shared: Arc::clone(&self.shared),
            events: self.events.clone(),
        }))
    }
}

/// Player handed out by [`FakeEngine`].
pub struct FakePlayer {
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<PlayerEvent>,
}

impl FakePlayer {
    fn record(&self, call: PlayerCall) {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .calls
            .push(call);
    }
}

impl MediaPlayer for FakePlayer {
    fn prepare(&self) -> BoxFuture<'static, Result<AssetInfo, MediaError>> {
        self.record(PlayerCall::Prepare);
        let result = self
            .shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .prepare_result
            .clone();
        future::ready(result).boxed()
    }

    fn play(&mut self) {
        self.record(PlayerCall::Play);
    }

    fn pause(&mut self) {
        self.record(PlayerCall::Pause);
    }

    fn seek_to_start(&mut self) {
        self.record(PlayerCall::SeekToStart);
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(PlayerCall::SetMuted(muted));
    }

    fn set_native_controls(&mut self, visible: bool) {
        self.record(PlayerCall::SetNativeControls(visible));
    }

    fn events(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    fn frame(&self) -> Option<Handle> {
        None
    }
}

impl Drop for FakePlayer {
    fn drop(&mut self) {
        self.record(PlayerCall::Released);
    }
}

/// A request received by [`FakeFullscreen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenCall {
    Enter,
    Override(Orientation),
    Restore(Orientation),
}

/// Fullscreen capability double.
#[derive(Debug, Clone)]
pub struct FakeFullscreen {
    available: bool,
    calls: Arc<Mutex<Vec<FullscreenCall>>>,
}

impl FakeFullscreen {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<FullscreenCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: FullscreenCall) -> Task<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        Task::none()
    }
}

impl FullscreenCapability for FakeFullscreen {
    fn is_available(&self) -> bool {
        self.available
    }

    fn enter_fullscreen(&self) -> Task<()> {
        self.record(FullscreenCall::Enter)
    }

    fn override_orientation(&self, orientation: Orientation) -> Task<()> {
        self.record(FullscreenCall::Override(orientation))
    }

    fn restore_orientation(&self, orientation: Orientation) -> Task<()> {
        self.record(FullscreenCall::Restore(orientation))
    }
}
