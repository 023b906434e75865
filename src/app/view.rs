// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the link bar,
//! the stage-dependent content below it, and the overlay layers (completion
//! modal and toasts) on top.

use super::{Message, Stage};
use crate::i18n::fluent::I18n;
use crate::net::download::RunReport;
use crate::session::{PhotoSession, Selection};
use crate::ui::completion_modal::{self, ViewContext as ModalViewContext};
use crate::ui::download_bar::{self, RunStatus, ViewContext as DownloadBarViewContext};
use crate::ui::error_screen;
use crate::ui::gallery::{self, Thumbnail, ViewContext as GalleryViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::link_bar::{self, ViewContext as LinkBarViewContext};
use crate::ui::loading;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::welcome;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub link_input: &'a str,
    pub show_invalid_link: bool,
    pub stage: &'a Stage,
    pub selection: &'a Selection,
    pub thumbnails: &'a HashMap<String, Thumbnail>,
    pub run_status: RunStatus,
    pub completed_run: Option<&'a RunReport>,
    pub spinner_rotation: f32,
    pub notifications: &'a notifications::Manager,
}

/// Renders the whole application view for the current stage.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = link_bar::view(LinkBarViewContext {
        i18n: ctx.i18n,
        value: ctx.link_input,
        show_invalid: ctx.show_invalid_link,
    })
    .map(Message::LinkBar);

    let content: Element<'_, Message> = match ctx.stage {
        Stage::Welcome => welcome::view(ctx.i18n),
        Stage::Loading => loading::view(ctx.i18n, ctx.spinner_rotation),
        Stage::Failed(error) => error_screen::view(ctx.i18n, error),
        Stage::Ready(session) => view_session(&ctx, session),
    };

    let base = Container::new(
        Column::new().push(bar).push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::app_background);

    let mut stack = Stack::new().push(base);

    if let Some(report) = ctx.completed_run {
        stack = stack.push(
            completion_modal::view(ModalViewContext {
                i18n: ctx.i18n,
                report,
            })
            .map(Message::Modal),
        );
    }

    stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    stack.into()
}

/// Renders the loaded session: scrollable galleries above the download bar.
fn view_session<'a>(ctx: &ViewContext<'a>, session: &'a PhotoSession) -> Element<'a, Message> {
    let galleries = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        session,
        selection: ctx.selection,
        thumbnails: ctx.thumbnails,
        spinner_rotation: ctx.spinner_rotation,
        interactive: !ctx.run_status.is_running(),
    })
    .map(Message::Gallery);

    let scroll = scrollable(
        Container::new(galleries)
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .height(Length::Fill);

    let bar = download_bar::view(DownloadBarViewContext {
        i18n: ctx.i18n,
        selected_count: ctx.selection.total(),
        status: ctx.run_status,
    })
    .map(Message::DownloadBar);

    Column::new().push(scroll).push(bar).into()
}
