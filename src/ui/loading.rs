// SPDX-License-Identifier: MPL-2.0
//! Full-screen loading state shown while a photo session is being fetched.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render the loading screen with a spinner at the given rotation angle.
pub fn view<Message: 'static>(i18n: &I18n, spinner_rotation: f32) -> Element<'static, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element();

    let caption = Text::new(i18n.tr("loading-session"))
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::TEXT_MUTED),
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(caption),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
