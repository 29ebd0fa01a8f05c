// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the platform collaborators of the widget.
//!
//! # Available Ports
//!
//! - [`media`]: Platform media engine (asset preparation, decode, presentation)
//! - [`image`]: Preview image loading
//! - [`fullscreen`]: Forced fullscreen and orientation coercion
//!
//! # Design Notes
//!
//! - Asynchronous work returns a boxed `Send` future, run by callers with
//!   `Task::perform`
//! - Ports whose only effect is on the window return `Task<()>`
//! - Failures are domain errors; the widget never surfaces them to the user

pub mod fullscreen;
pub mod image;
pub mod media;

pub use fullscreen::FullscreenCapability;
pub use image::ImageLoader;
pub use media::{MediaEngine, MediaPlayer, PlayerEvent};
