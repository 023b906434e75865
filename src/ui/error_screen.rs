// SPDX-License-Identifier: MPL-2.0
//! Full-screen error state shown when a photo session could not be loaded.

use crate::error::SessionError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render the error screen for a failed session load.
pub fn view<Message: 'static>(i18n: &I18n, error: &SessionError) -> Element<'static, Message> {
    let glyph = Text::new("\u{26A0}")
        .size(sizing::ICON_XL)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WARNING_500),
        });

    let title = Text::new(i18n.tr("error-title")).size(typography::TITLE_MD);

    let message = Text::new(message_for(i18n, error)).size(typography::BODY_LG);

    let hint = Text::new(i18n.tr("error-hint"))
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::TEXT_MUTED),
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(glyph)
            .push(title)
            .push(message)
            .push(hint),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Resolves the localized message for a session error.
///
/// Only the unexpected-status variant carries an argument; every other
/// variant maps straight to its catalog key.
fn message_for(i18n: &I18n, error: &SessionError) -> String {
    match error {
        SessionError::Status(code) => {
            i18n.tr_with_args("error-session-status", &[("status", &code.to_string())])
        }
        other => i18n.tr(other.i18n_key()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_the_code() {
        let i18n = I18n::default();
        let message = message_for(&i18n, &SessionError::Status(503));
        assert!(message.contains("503"));
    }

    #[test]
    fn non_status_errors_resolve_their_catalog_key() {
        let i18n = I18n::default();
        let message = message_for(&i18n, &SessionError::Timeout);
        assert!(!message.is_empty());
        assert_ne!(message, "error-session-timeout");
    }

    #[test]
    fn error_screen_renders_every_variant() {
        let i18n = I18n::default();
        let errors = [
            SessionError::InvalidLink,
            SessionError::Unreachable("connection refused".into()),
            SessionError::Timeout,
            SessionError::NotFound,
            SessionError::Status(500),
            SessionError::MalformedResponse("bad json".into()),
            SessionError::Other("boom".into()),
        ];
        for error in &errors {
            let _element: Element<'static, ()> = view(&i18n, error);
        }
    }
}
