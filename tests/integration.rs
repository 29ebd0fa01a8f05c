// SPDX-License-Identifier: MPL-2.0
use iced_autoplay::config::{self, Config};
use iced_autoplay::test_utils::{FakeEngine, PlayerCall};
use iced_autoplay::{PlayerConfig, VideoPlayerWidget};
use std::sync::Arc;
use tempfile::tempdir;
use url::Url;

#[test]
fn test_persisted_defaults_configure_new_players() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("player.toml");

    let saved = Config {
        autoplay: Some(true),
        auto_repeat: Some(true),
        custom_controls: Some(false),
        min_visibility_ratio: Some(0.5),
        muted: Some(true),
        auto_fullscreen: None,
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    let player_config = PlayerConfig {
        video_source: Some(Url::parse("file:///videos/clip.mp4").expect("valid url")),
        ..loaded.player_config()
    };

    assert!(player_config.autoplay_enabled);
    assert!(player_config.auto_repeat_enabled);
    assert!(!player_config.use_custom_controls);
    assert!(!player_config.auto_fullscreen_enabled);
    assert!((player_config.min_visibility_ratio - 0.5).abs() < f32::EPSILON);

    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(player_config.clone());

    assert_eq!(widget.config(), &player_config);
    // The source is applied first, so the new player receives the native
    // controls and the mute flag.
    assert_eq!(
        engine.calls(),
        vec![
            PlayerCall::SetNativeControls(false),
            PlayerCall::SetNativeControls(true),
            PlayerCall::SetMuted(true),
        ]
    );
}

#[test]
fn test_corrupted_config_yields_default_player() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("player.toml");
    std::fs::write(&path, "autoplay = [").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Invalid TOML falls back to defaults");
    assert_eq!(loaded.player_config(), PlayerConfig::default());
}
