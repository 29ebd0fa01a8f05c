// SPDX-License-Identifier: MPL-2.0
//! The video player widget and its sub-components.
//!
//! Each sub-component follows the same shape: a `State`, a `Message` enum,
//! an `Effect` enum, and `handle(msg) -> Effect`. The [`component`] owns them
//! all and turns their effects into tasks.
//!
//! - [`visibility`] - Visibility polling that drives autoplay
//! - [`gestures`] - Preview image, play icon and tap target
//! - [`fullscreen`] - Rotation-driven fullscreen and change notifications

pub mod component;
pub mod fullscreen;
pub mod gestures;
pub mod visibility;

pub use component::{Effect, Message, State};
