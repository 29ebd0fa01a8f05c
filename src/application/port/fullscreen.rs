// SPDX-License-Identifier: MPL-2.0
//! Forced fullscreen port.
//!
//! Entering fullscreen on rotation and coercing the presentation to rotate
//! along rely on platform-specific behavior, so both are pluggable. Platforms
//! without a forced-fullscreen primitive report `is_available() == false` and
//! the widget skips the transition silently.

use crate::domain::display::Orientation;
use iced::Task;

pub trait FullscreenCapability: Send + Sync {
    /// Capability probe, checked before every transition.
    fn is_available(&self) -> bool {
        true
    }

    /// Presents the player fullscreen.
    fn enter_fullscreen(&self) -> Task<()>;

    /// Temporarily overrides the orientation reported by the system.
    fn override_orientation(&self, _orientation: Orientation) -> Task<()> {
        Task::none()
    }

    /// Restores the system-reported orientation after an override.
    fn restore_orientation(&self, _orientation: Orientation) -> Task<()> {
        Task::none()
    }
}
