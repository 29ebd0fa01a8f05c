// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`player`] - The video player widget and its sub-components
//! - [`widgets`] - Custom Iced widgets (visibility probe)
//! - [`styles`] - Player surface and overlay styles

pub mod player;
pub mod styles;
pub mod widgets;
