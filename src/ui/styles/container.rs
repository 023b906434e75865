// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Root surface filling the window with the warm background color.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Horizontal bar surface for the link bar and the download bar.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Gallery card surface. Selected cards carry the teal accent border.
pub fn card(selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (border_color, border_width) = if selected {
            (palette::ACCENT_500, border::WIDTH_MD)
        } else {
            (palette::BORDER, border::WIDTH_SM)
        };

        container::Style {
            background: Some(Background::Color(palette::SURFACE)),
            text_color: Some(palette::TEXT),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Frame behind a thumbnail while it loads or after it failed.
pub fn thumbnail_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::TEXT_MUTED),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the completion dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Centered dialog card.
pub fn modal_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        border: Border {
            color: palette::BORDER,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
