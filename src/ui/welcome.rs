// SPDX-License-Identifier: MPL-2.0
//! Empty state shown before any share link has been loaded.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render the welcome screen prompting for a share link.
pub fn view<Message: 'static>(i18n: &I18n) -> Element<'static, Message> {
    let title = Text::new(i18n.tr("welcome-title")).size(typography::TITLE_LG);

    let body = Text::new(i18n.tr("welcome-body"))
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::TEXT_MUTED),
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
