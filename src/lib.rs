// SPDX-License-Identifier: MPL-2.0
//! `iced_autoplay` is a video player widget for the Iced GUI framework.
//!
//! It wraps a platform media engine and adds a preview image, custom
//! tap-to-play controls, autoplay driven by on-screen visibility, auto-repeat
//! and automatic fullscreen when the device turns to landscape.
//!
//! The widget is [`ui::player::State`]; hosts forward its
//! [`Message`](ui::player::Message)s to
//! [`handle_message`](ui::player::State::handle_message) and include its
//! `view()` and `subscription()` in their own.

#![doc(html_root_url = "https://docs.rs/iced_autoplay/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod video_player;

#[doc(hidden)]
pub mod test_utils;

pub use config::{ConfigChange, PlayerConfig};
pub use domain::video::PlaybackState;
pub use error::{Error, MediaError, Result};
pub use ui::player::State as VideoPlayerWidget;
