// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the player widget through its messages,
//! with an in-memory media engine standing in for the platform.

use iced::{Point, Rectangle, Size};
use iced_autoplay::application::port::PlayerEvent;
use iced_autoplay::domain::display::Orientation;
use iced_autoplay::domain::video::AssetInfo;
use iced_autoplay::test_utils::{FakeEngine, FakeFullscreen, FullscreenCall, PlayerCall};
use iced_autoplay::ui::player::{gestures, Effect, Message};
use iced_autoplay::ui::widgets::{Geometry, ProbeEvent};
use iced_autoplay::{ConfigChange, MediaError, PlayerConfig, VideoPlayerWidget};
use std::sync::{Arc, Mutex};
use url::Url;

const SCREEN: Size = Size::new(390.0, 844.0);
const CELL: Size = Size::new(390.0, 220.0);

fn clip() -> Url {
    Url::parse("https://cdn.example.com/feed/clip-1.mp4").expect("valid url")
}

fn feed_config() -> PlayerConfig {
    PlayerConfig {
        video_source: Some(clip()),
        autoplay_enabled: true,
        ..PlayerConfig::default()
    }
}

/// Scrolls the cell so that its top edge sits at `y` on screen.
fn scroll_to(widget: &mut VideoPlayerWidget, y: f32) {
    widget.handle_message(Message::Probe(ProbeEvent::Layout(Geometry {
        bounds: Rectangle::new(Point::new(0.0, y), CELL),
        viewport: Rectangle::new(Point::ORIGIN, SCREEN),
    })));
}

fn resolve_preparation(widget: &mut VideoPlayerWidget, result: Result<AssetInfo, MediaError>) {
    let session = widget.session().expect("player loaded");
    widget.handle_message(Message::AssetPrepared { session, result });
}

fn emit(widget: &mut VideoPlayerWidget, event: PlayerEvent) -> Effect {
    let session = widget.session().expect("player loaded");
    widget.handle_message(Message::Player { session, event }).0
}

#[test]
fn fully_visible_cell_plays_within_one_tick() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 100.0);

    widget.handle_message(Message::VisibilityTick);
    resolve_preparation(&mut widget, Ok(FakeEngine::playable_asset()));

    assert!(widget.playback_state().is_playing);
    assert_eq!(engine.count(&PlayerCall::Play), 1);

    emit(&mut widget, PlayerEvent::RateChanged(1.0));
    assert!(!widget.is_preview_visible());
    assert!(!widget.is_play_icon_visible());
}

#[test]
fn half_visible_cell_stays_paused_with_play_icon() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 100.0);
    widget.handle_message(Message::VisibilityTick);
    resolve_preparation(&mut widget, Ok(FakeEngine::playable_asset()));

    // Half of the cell scrolled off the bottom of the screen.
    scroll_to(&mut widget, SCREEN.height - CELL.height / 2.0);
    widget.handle_message(Message::VisibilityTick);

    assert!(!widget.playback_state().is_playing);
    assert!(widget.is_play_icon_visible());
    assert_eq!(engine.calls().last(), Some(&PlayerCall::Pause));
}

#[test]
fn threshold_is_inclusive() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(PlayerConfig {
        min_visibility_ratio: 0.5,
        ..feed_config()
    });
    scroll_to(&mut widget, SCREEN.height - CELL.height / 2.0);

    widget.handle_message(Message::VisibilityTick);
    assert!(widget.playback_state().is_playing);
}

#[test]
fn unplayable_asset_abandons_playback_quietly() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);
    widget.handle_message(Message::VisibilityTick);

    resolve_preparation(&mut widget, Err(MediaError::NotPlayable));

    assert!(!widget.playback_state().is_playing);
    assert!(!widget.playback_state().has_loaded_asset);
    assert!(widget.is_preview_visible());
    assert_eq!(engine.count(&PlayerCall::Play), 0);
}

#[test]
fn unplayable_asset_is_not_prepared_on_every_tick() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);
    widget.handle_message(Message::VisibilityTick);
    resolve_preparation(&mut widget, Err(MediaError::NotPlayable));

    for _ in 0..5 {
        widget.handle_message(Message::VisibilityTick);
    }
    assert_eq!(engine.count(&PlayerCall::Prepare), 1);
    assert!(!widget.playback_state().is_playing);

    widget.apply(ConfigChange::VideoSource(Some(
        Url::parse("https://cdn.example.com/feed/clip-2.mp4").expect("valid url"),
    )));
    widget.handle_message(Message::VisibilityTick);
    assert_eq!(engine.count(&PlayerCall::Prepare), 2);
}

#[test]
fn auto_repeat_loops_only_when_enabled() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);
    widget.handle_message(Message::VisibilityTick);
    resolve_preparation(&mut widget, Ok(FakeEngine::playable_asset()));

    emit(&mut widget, PlayerEvent::ReachedEnd);
    assert_eq!(engine.count(&PlayerCall::SeekToStart), 0);

    widget.apply(ConfigChange::AutoRepeat(true));
    emit(&mut widget, PlayerEvent::ReachedEnd);
    assert_eq!(engine.count(&PlayerCall::SeekToStart), 1);
    assert_eq!(engine.count(&PlayerCall::Play), 2);
}

#[test]
fn user_pause_survives_scrolling_until_play_is_tapped() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);
    widget.handle_message(Message::VisibilityTick);
    resolve_preparation(&mut widget, Ok(FakeEngine::playable_asset()));

    widget.handle_message(Message::Gesture(gestures::Message::SurfaceTapped));
    scroll_to(&mut widget, 50.0);
    widget.handle_message(Message::VisibilityTick);
    assert!(!widget.playback_state().is_playing);

    widget.handle_message(Message::Gesture(gestures::Message::PlayIconTapped));
    resolve_preparation(&mut widget, Ok(FakeEngine::playable_asset()));
    assert!(widget.playback_state().is_playing);
    assert_eq!(engine.count(&PlayerCall::Play), 2);
}

#[test]
fn new_source_replaces_player_and_clears_halt() {
    let engine = FakeEngine::new();
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);
    widget.handle_message(Message::Gesture(gestures::Message::SurfaceTapped));
    assert!(!widget.is_monitoring());

    let next = Url::parse("https://cdn.example.com/feed/clip-2.mp4").expect("valid url");
    widget.apply(ConfigChange::VideoSource(Some(next.clone())));

    assert_eq!(engine.opened(), vec![clip(), next]);
    assert_eq!(engine.count(&PlayerCall::Released), 1);
    assert!(widget.is_monitoring());
    assert!(!widget.playback_state().is_playing);
}

#[test]
fn rejected_source_leaves_widget_inert() {
    let engine = FakeEngine::new();
    engine.reject_sources(true);
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()));
    widget.configure(feed_config());
    scroll_to(&mut widget, 0.0);

    widget.handle_message(Message::VisibilityTick);

    assert!(widget.session().is_none());
    assert!(!widget.playback_state().is_playing);
    assert!(engine.calls().is_empty());
}

#[test]
fn rotation_enters_fullscreen_and_reports_changes() {
    let engine = FakeEngine::new();
    let capability = FakeFullscreen::new(true);
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()))
        .with_fullscreen(Arc::new(capability.clone()));
    widget.configure(PlayerConfig {
        auto_fullscreen_enabled: true,
        ..feed_config()
    });
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let listener = widget.subscribe_fullscreen(move |fullscreen| {
        sink.lock().expect("lock").push(fullscreen);
    });
    widget.handle_message(Message::Probe(ProbeEvent::DisplayResized(SCREEN)));
    scroll_to(&mut widget, 0.0);

    // Rotating the window swaps its dimensions.
    let landscape = Size::new(SCREEN.height, SCREEN.width);
    widget.handle_message(Message::Probe(ProbeEvent::DisplayResized(landscape)));
    assert_eq!(
        capability.calls(),
        vec![
            FullscreenCall::Enter,
            FullscreenCall::Override(Orientation::Portrait)
        ]
    );

    let effect = emit(
        &mut widget,
        PlayerEvent::SurfaceBoundsChanged(Rectangle::new(Point::ORIGIN, landscape)),
    );
    assert_eq!(effect, Effect::FullscreenChanged(true));
    assert!(widget.playback_state().is_fullscreen);

    assert!(widget.unsubscribe_fullscreen(listener));
    let effect = emit(
        &mut widget,
        PlayerEvent::SurfaceBoundsChanged(Rectangle::new(Point::ORIGIN, CELL)),
    );
    assert_eq!(effect, Effect::FullscreenChanged(false));
    assert_eq!(*changes.lock().expect("lock"), vec![true]);
}

#[test]
fn rotation_has_no_effect_once_auto_fullscreen_is_disabled() {
    let engine = FakeEngine::new();
    let capability = FakeFullscreen::new(true);
    let mut widget = VideoPlayerWidget::new(Arc::new(engine.clone()))
        .with_fullscreen(Arc::new(capability.clone()));
    widget.configure(PlayerConfig {
        auto_fullscreen_enabled: true,
        ..feed_config()
    });
    widget.handle_message(Message::Probe(ProbeEvent::DisplayResized(SCREEN)));
    scroll_to(&mut widget, 0.0);

    widget.apply(ConfigChange::AutoFullscreen(false));
    widget.handle_message(Message::OrientationChanged(Orientation::LandscapeRight));
    widget.handle_message(Message::OrientationChanged(Orientation::Portrait));
    widget.handle_message(Message::OrientationChanged(Orientation::LandscapeLeft));

    assert!(capability.calls().is_empty());
}
