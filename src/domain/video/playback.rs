// SPDX-License-Identifier: MPL-2.0
//! Playback intent and the state snapshot exposed by the player widget.
//!
//! Starting playback is a two-step affair: `play()` records the *desired*
//! intent immediately, and the *committed* intent only follows once the asset
//! has been prepared. Keeping both lets a `pause()` issued during preparation
//! win over the stale `play()`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// What the player is meant to be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    #[default]
    Paused,
    Playing,
}

impl Intent {
    /// Returns true for [`Intent::Playing`].
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Desired intent alongside the intent the player has actually been
/// commanded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentPair {
    pub desired: Intent,
    pub committed: Intent,
}

impl IntentPair {
    /// Returns true while a `play()` is waiting for the asset to be ready.
    #[must_use]
    pub fn is_pending(self) -> bool {
        self.desired.is_playing() && !self.committed.is_playing()
    }
}

/// Snapshot of the widget's playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    /// Playback intent (optimistic: true as soon as `play()` was accepted).
    pub is_playing: bool,
    pub is_fullscreen: bool,
    /// True once the current asset finished preparing successfully.
    pub has_loaded_asset: bool,
}

/// Metadata resolved when an asset is prepared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetInfo {
    pub playable: bool,
    pub track_count: usize,
    pub duration: Option<Duration>,
}

impl AssetInfo {
    /// An asset is worth starting only if it is playable and has tracks.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.playable && self.track_count > 0
    }
}

/// Identifies one player instance bound to one asset.
///
/// Allocated from a process-wide counter so that subscriptions of different
/// widgets never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

impl SessionId {
    /// Allocates a fresh session identifier.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intent_is_paused() {
        assert_eq!(Intent::default(), Intent::Paused);
        assert!(!IntentPair::default().is_pending());
    }

    #[test]
    fn pending_only_between_desire_and_commit() {
        let pending = IntentPair {
            desired: Intent::Playing,
            committed: Intent::Paused,
        };
        assert!(pending.is_pending());

        let committed = IntentPair {
            desired: Intent::Playing,
            committed: Intent::Playing,
        };
        assert!(!committed.is_pending());
    }

    #[test]
    fn asset_without_tracks_is_not_playable() {
        let info = AssetInfo {
            playable: true,
            track_count: 0,
            duration: Some(Duration::from_secs(3)),
        };
        assert!(!info.is_playable());
    }

    #[test]
    fn session_ids_are_unique() {
        let a = SessionId::next();
        let b = SessionId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }
}
