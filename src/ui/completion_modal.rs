// SPDX-License-Identifier: MPL-2.0
//! End-of-run modal shown over the galleries once a download run finishes.
//!
//! The modal reports how many photos were saved out of how many were
//! attempted. It blocks interaction with the screen underneath and only
//! the close button dismisses it.

use crate::i18n::fluent::I18n;
use crate::net::download::RunReport;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, opaque, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the completion modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub report: &'a RunReport,
}

/// Messages emitted by the completion modal.
#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
}

/// Process a modal message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::CloseRequested => Event::Close,
    }
}

/// Render the completion modal as a full-screen overlay layer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("modal-title")).size(typography::TITLE_MD);

    let summary = Text::new(ctx.i18n.tr_with_args(
        "modal-saved-count",
        &[
            ("saved", &ctx.report.saved.to_string()),
            ("attempted", &ctx.report.attempted.to_string()),
        ],
    ))
    .size(typography::BODY_LG);

    let close = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::CloseRequested);

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(title)
            .push(summary)
            .push(close),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::XL)
    .style(styles::container::modal_card);

    // The opaque backdrop swallows clicks so only the close button dismisses.
    opaque(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::modal_backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_press_maps_to_close_event() {
        let event = update(Message::CloseRequested);
        assert!(matches!(event, Event::Close));
    }

    #[test]
    fn completion_modal_renders_clean_and_partial_reports() {
        let i18n = I18n::default();

        for report in [
            RunReport {
                attempted: 4,
                saved: 4,
                failed: 0,
            },
            RunReport {
                attempted: 4,
                saved: 2,
                failed: 2,
            },
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                report: &report,
            });
        }
    }
}
