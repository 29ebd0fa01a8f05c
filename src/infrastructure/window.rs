// SPDX-License-Identifier: MPL-2.0
//! Fullscreen adapters for desktop windows.

use crate::application::port::FullscreenCapability;
use iced::{window, Task};

/// Switches the Iced window hosting the player to fullscreen.
///
/// Windows have no orientation to coerce, so the orientation hooks keep their
/// no-op defaults.
#[derive(Debug, Clone, Copy)]
pub struct WindowFullscreen {
    window: window::Id,
}

impl WindowFullscreen {
    pub fn new(window: window::Id) -> Self {
        Self { window }
    }
}

impl FullscreenCapability for WindowFullscreen {
    fn enter_fullscreen(&self) -> Task<()> {
        window::set_mode(self.window, window::Mode::Fullscreen)
    }
}

/// Capability for hosts without a forced-fullscreen primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFullscreen;

impl FullscreenCapability for NoFullscreen {
    fn is_available(&self) -> bool {
        false
    }

    fn enter_fullscreen(&self) -> Task<()> {
        Task::none()
    }
}
