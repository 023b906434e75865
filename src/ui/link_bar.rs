// SPDX-License-Identifier: MPL-2.0
//! Share link input bar shown at the top of the window.
//!
//! The bar holds the app name, a text input for the share link, and a load
//! button. A malformed link is reported inline below the input without
//! leaving the current screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{
    alignment::Vertical,
    Element, Length, Theme,
};

/// Contextual data needed to render the link bar.
///
/// The bar stays interactive through loads and runs; a fresh submission
/// supersedes the in-flight load and an active run keeps going.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current content of the input field.
    pub value: &'a str,
    /// Whether the last submitted link failed to parse.
    pub show_invalid: bool,
}

/// Messages emitted by the link bar.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked to load the current link.
    Submit,
}

/// Process a link bar message and return the corresponding event.
///
/// Editing the input clears the inline invalid-link marker.
pub fn update(message: Message, value: &mut String, show_invalid: &mut bool) -> Event {
    match message {
        Message::InputChanged(new_value) => {
            *value = new_value;
            *show_invalid = false;
            Event::None
        }
        Message::Submitted => Event::Submit,
    }
}

/// Render the link bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_600),
        });

    let placeholder = ctx.i18n.tr("link-bar-placeholder");
    let input = text_input(&placeholder, ctx.value)
        .size(typography::BODY_LG)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted);

    let load_button = button(Text::new(ctx.i18n.tr("link-bar-load")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Submitted);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(app_name)
        .push(input.width(Length::Fill))
        .push(load_button);

    let mut content = Column::new().spacing(spacing::XXS).push(row);

    if ctx.show_invalid {
        content = content.push(
            Text::new(ctx.i18n.tr("error-link-invalid"))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::bar)
        .into()
}
