// SPDX-License-Identifier: MPL-2.0
//! Playback engine glue for the player widget.
//!
//! This module wraps the platform player behind a [`PlaybackController`] and
//! delivers the player's events to the Iced event loop through a
//! subscription.

mod state;
pub mod subscription;

pub use state::{Effect, PlaybackController};
pub use subscription::player_events;
