// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the player surface and its custom controls.

use crate::config::defaults::{PLAY_ICON_BACKGROUND_ALPHA, PLAY_ICON_SIZE};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background behind the video surface.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        ..Default::default()
    }
}

/// Circular disc behind the play glyph.
pub fn play_icon(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: PLAY_ICON_BACKGROUND_ALPHA,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color {
                a: 0.8,
                ..Color::WHITE
            },
            width: 2.0,
            radius: (PLAY_ICON_SIZE / 2.0).into(),
        },
        ..Default::default()
    }
}
