//! Player configuration: the per-widget [`PlayerConfig`], the [`ConfigChange`]
//! deltas applied to a live widget, and the persisted [`Config`] holding the
//! behavior defaults in a `player.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_autoplay::config::{self, Config};
//!
//! // Load persisted defaults, falling back to built-in ones
//! let mut config = config::load().unwrap_or_default();
//!
//! // Turn on autoplay for every new player
//! config.autoplay = Some(true);
//! config::save(&config).expect("Failed to save config");
//!
//! let player = config.player_config();
//! assert!(player.autoplay_enabled);
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub use defaults::DEFAULT_MIN_VISIBILITY_RATIO;

const CONFIG_FILE: &str = "player.toml";
const APP_NAME: &str = "IcedAutoplay";

/// Configuration of a single player widget, owned by the widget and set by
/// its container at bind time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub video_source: Option<Url>,
    pub preview_image_source: Option<Url>,
    pub autoplay_enabled: bool,
    pub auto_repeat_enabled: bool,
    pub use_custom_controls: bool,
    /// Fraction in `[0, 1]`; stored as given.
    pub min_visibility_ratio: f32,
    pub muted: bool,
    pub auto_fullscreen_enabled: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            video_source: None,
            preview_image_source: None,
            autoplay_enabled: false,
            auto_repeat_enabled: false,
            use_custom_controls: true,
            min_visibility_ratio: DEFAULT_MIN_VISIBILITY_RATIO,
            muted: false,
            auto_fullscreen_enabled: false,
        }
    }
}

/// A single field change on a [`PlayerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigChange {
    VideoSource(Option<Url>),
    PreviewImageSource(Option<Url>),
    Autoplay(bool),
    AutoRepeat(bool),
    CustomControls(bool),
    MinVisibilityRatio(f32),
    Muted(bool),
    AutoFullscreen(bool),
}

impl PlayerConfig {
    /// Lists the changes turning `self` into `next`.
    ///
    /// The video source always comes first so that later changes (mute in
    /// particular) reach the freshly opened player.
    pub fn diff(&self, next: &PlayerConfig) -> Vec<ConfigChange> {
        let mut changes = Vec::new();
        if self.video_source != next.video_source {
            changes.push(ConfigChange::VideoSource(next.video_source.clone()));
        }
        if self.preview_image_source != next.preview_image_source {
            changes.push(ConfigChange::PreviewImageSource(
                next.preview_image_source.clone(),
            ));
        }
        if self.use_custom_controls != next.use_custom_controls {
            changes.push(ConfigChange::CustomControls(next.use_custom_controls));
        }
        if self.muted != next.muted {
            changes.push(ConfigChange::Muted(next.muted));
        }
        if self.auto_repeat_enabled != next.auto_repeat_enabled {
            changes.push(ConfigChange::AutoRepeat(next.auto_repeat_enabled));
        }
        if self.min_visibility_ratio != next.min_visibility_ratio {
            changes.push(ConfigChange::MinVisibilityRatio(next.min_visibility_ratio));
        }
        if self.auto_fullscreen_enabled != next.auto_fullscreen_enabled {
            changes.push(ConfigChange::AutoFullscreen(next.auto_fullscreen_enabled));
        }
        if self.autoplay_enabled != next.autoplay_enabled {
            changes.push(ConfigChange::Autoplay(next.autoplay_enabled));
        }
        changes
    }

    /// Records a change on the config and returns whether it altered anything.
    pub fn record(&mut self, change: &ConfigChange) -> bool {
        match change {
            ConfigChange::VideoSource(source) => replace(&mut self.video_source, source),
            ConfigChange::PreviewImageSource(source) => {
                replace(&mut self.preview_image_source, source)
            }
            ConfigChange::Autoplay(value) => replace(&mut self.autoplay_enabled, value),
            ConfigChange::AutoRepeat(value) => replace(&mut self.auto_repeat_enabled, value),
            ConfigChange::CustomControls(value) => replace(&mut self.use_custom_controls, value),
            ConfigChange::MinVisibilityRatio(value) => {
                replace(&mut self.min_visibility_ratio, value)
            }
            ConfigChange::Muted(value) => replace(&mut self.muted, value),
            ConfigChange::AutoFullscreen(value) => {
                replace(&mut self.auto_fullscreen_enabled, value)
            }
        }
    }
}

fn replace<T: PartialEq + Clone>(slot: &mut T, value: &T) -> bool {
    if slot == value {
        return false;
    }
    *slot = value.clone();
    true
}

/// Persisted behavior defaults applied to newly created players.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub auto_repeat: Option<bool>,
    #[serde(default)]
    pub custom_controls: Option<bool>,
    #[serde(default)]
    pub min_visibility_ratio: Option<f32>,
    #[serde(default)]
    pub muted: Option<bool>,
    #[serde(default)]
    pub auto_fullscreen: Option<bool>,
}

impl Config {
    /// Builds a source-less player config from the persisted defaults.
    pub fn player_config(&self) -> PlayerConfig {
        let base = PlayerConfig::default();
        PlayerConfig {
            autoplay_enabled: self.autoplay.unwrap_or(base.autoplay_enabled),
            auto_repeat_enabled: self.auto_repeat.unwrap_or(base.auto_repeat_enabled),
            use_custom_controls: self.custom_controls.unwrap_or(base.use_custom_controls),
            min_visibility_ratio: self
                .min_visibility_ratio
                .unwrap_or(base.min_visibility_ratio),
            muted: self.muted.unwrap_or(base.muted),
            auto_fullscreen_enabled: self
                .auto_fullscreen
                .unwrap_or(base.auto_fullscreen_enabled),
            ..base
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring invalid player config {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
