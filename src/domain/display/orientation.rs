// SPDX-License-Identifier: MPL-2.0
//! Device orientation as reported by the host platform.

/// Physical orientation of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    /// Face up, face down or not yet reported.
    Unknown,
}

impl Orientation {
    /// Returns true for both landscape orientations.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }

    /// Derives an orientation from display dimensions.
    ///
    /// Desktop windows have no orientation sensor, so a display wider than it
    /// is tall counts as landscape. Degenerate sizes are `Unknown`.
    #[must_use]
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        if !(width > 0.0 && height > 0.0) {
            Self::Unknown
        } else if width > height {
            Self::LandscapeLeft
        } else {
            Self::Portrait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_landscape_orientations_are_landscape() {
        assert!(Orientation::LandscapeLeft.is_landscape());
        assert!(Orientation::LandscapeRight.is_landscape());
        assert!(!Orientation::Portrait.is_landscape());
        assert!(!Orientation::PortraitUpsideDown.is_landscape());
        assert!(!Orientation::Unknown.is_landscape());
    }

    #[test]
    fn dimensions_map_to_orientation() {
        assert_eq!(
            Orientation::from_dimensions(1920.0, 1080.0),
            Orientation::LandscapeLeft
        );
        assert_eq!(
            Orientation::from_dimensions(390.0, 844.0),
            Orientation::Portrait
        );
        assert_eq!(Orientation::from_dimensions(500.0, 500.0), Orientation::Portrait);
    }

    #[test]
    fn degenerate_dimensions_are_unknown() {
        assert_eq!(Orientation::from_dimensions(0.0, 600.0), Orientation::Unknown);
        assert_eq!(
            Orientation::from_dimensions(f32::NAN, 600.0),
            Orientation::Unknown
        );
    }
}
