// SPDX-License-Identifier: MPL-2.0
//! Bottom action bar with the run status line and the download button.
//!
//! The bar is always visible while a session is shown. It carries the
//! status line the sequencer drives ("Downloading photo 3 of 9...") and
//! the button that starts a run over the current selection.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Where the current run stands, as shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// No run yet, nothing to report.
    #[default]
    Idle,
    /// The user asked to download with an empty selection.
    NothingSelected,
    /// A run is active; `current` is 1-based.
    Running { current: usize, total: usize },
    /// The last run finished.
    Complete,
}

impl RunStatus {
    /// Whether a run is currently active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running { .. })
    }
}

/// Contextual data needed to render the download bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Photos currently ticked across both groups.
    pub selected_count: usize,
    pub status: RunStatus,
}

/// Messages emitted by the download bar.
#[derive(Debug, Clone)]
pub enum Message {
    DownloadPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Download,
}

/// Process a download bar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::DownloadPressed => Event::Download,
    }
}

/// Render the download bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let status_line: Element<'a, Message> = match ctx.status {
        RunStatus::Idle => Text::new("").into(),
        RunStatus::NothingSelected => Text::new(ctx.i18n.tr("status-select-at-least-one"))
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            })
            .into(),
        RunStatus::Running { current, total } => Text::new(ctx.i18n.tr_with_args(
            "status-downloading",
            &[
                ("current", &current.to_string()),
                ("total", &total.to_string()),
            ],
        ))
        .size(typography::BODY)
        .into(),
        RunStatus::Complete => Text::new(ctx.i18n.tr("status-complete"))
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::SUCCESS_500),
            })
            .into(),
    };

    let label = if ctx.status.is_running() {
        ctx.i18n.tr("download-button-busy")
    } else {
        ctx.i18n.tr_with_args(
            "download-button",
            &[("count", &ctx.selected_count.to_string())],
        )
    };
    let mut download = button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    if !ctx.status.is_running() {
        download = download.on_press(Message::DownloadPressed);
    }

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(status_line)
        .push(iced::widget::space::horizontal())
        .push(download);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_press_maps_to_download_event() {
        let event = update(Message::DownloadPressed);
        assert!(matches!(event, Event::Download));
    }

    #[test]
    fn running_status_reports_is_running() {
        assert!(RunStatus::Running {
            current: 1,
            total: 3
        }
        .is_running());
        assert!(!RunStatus::Idle.is_running());
        assert!(!RunStatus::NothingSelected.is_running());
        assert!(!RunStatus::Complete.is_running());
    }

    #[test]
    fn download_bar_renders_in_all_states() {
        let i18n = I18n::default();

        for status in [
            RunStatus::Idle,
            RunStatus::NothingSelected,
            RunStatus::Running {
                current: 2,
                total: 5,
            },
            RunStatus::Complete,
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                selected_count: 3,
                status,
            });
        }
    }
}
