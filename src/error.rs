// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
    Image(String),
}

/// Failures reported by a media engine while opening or preparing an asset.
///
/// None of these reach the user: the widget stays on its preview image and
/// the failure is only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The source URL cannot be handled by the engine (unknown scheme, bad path).
    InvalidSource(String),

    /// The asset loaded but reports itself as not playable.
    NotPlayable,

    /// Preparation was cancelled, usually because the player was released.
    Cancelled,

    /// Engine-specific failure with raw message.
    Backend(String),
}

impl MediaError {
    /// Returns true when the failure comes from the engine giving up on its own
    /// work rather than from the asset itself.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, MediaError::Cancelled)
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::InvalidSource(source) => write!(f, "Invalid video source: {}", source),
            MediaError::NotPlayable => write!(f, "Asset is not playable"),
            MediaError::Cancelled => write!(f, "Asset preparation cancelled"),
            MediaError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
