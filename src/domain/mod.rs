// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`display`]: Display types ([`Orientation`](display::Orientation))
//! - [`video`]: Playback types ([`Intent`](video::Intent),
//!   [`PlaybackState`](video::PlaybackState), [`AssetInfo`](video::AssetInfo),
//!   [`SessionId`](video::SessionId))

pub mod display;
pub mod video;
