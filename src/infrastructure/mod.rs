// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`preview`]: Preview images over HTTP(S) and from local files (implements [`ImageLoader`])
//! - [`window`]: Fullscreen through the Iced window (implements [`FullscreenCapability`])
//!
//! The media engine itself is provided by the host application.
//!
//! [`ImageLoader`]: crate::application::port::ImageLoader
//! [`FullscreenCapability`]: crate::application::port::FullscreenCapability

pub mod preview;
pub mod window;

pub use preview::HttpImageLoader;
pub use window::{NoFullscreen, WindowFullscreen};
