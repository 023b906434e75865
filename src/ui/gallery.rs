// SPDX-License-Identifier: MPL-2.0
//! Photo gallery with one selectable section per photo group.
//!
//! Each section shows a header (title, selected count, select-all button)
//! above a grid of cards. A card is a thumbnail plus a checkbox; clicking
//! anywhere on the card toggles its selection. Thumbnails stream in after
//! the session loads, so every card also has loading and failed states.

use crate::i18n::fluent::I18n;
use crate::session::{PhotoGroup, PhotoSession, Selection};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, checkbox, mouse_area, space, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Theme,
};
use std::collections::HashMap;

/// Cards per grid row.
const GRID_COLUMNS: usize = 4;

/// Load state of one thumbnail, keyed by photo URL in the app state.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a PhotoSession,
    pub selection: &'a Selection,
    pub thumbnails: &'a HashMap<String, Thumbnail>,
    /// Shared rotation angle for thumbnail spinners.
    pub spinner_rotation: f32,
    /// Selection changes are ignored while a download run is active.
    pub interactive: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card (thumbnail or checkbox) was clicked.
    CardPressed(PhotoGroup, String),
    /// The section's select-all / clear-all button was clicked.
    SelectAllPressed(PhotoGroup),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Toggle(PhotoGroup, String),
    SelectAll(PhotoGroup),
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::CardPressed(group, url) => Event::Toggle(group, url),
        Message::SelectAllPressed(group) => Event::SelectAll(group),
    }
}

/// Render the gallery, or the whole-screen empty state when the session
/// has no photos in either group.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.session.is_empty() {
        return empty_state(ctx.i18n);
    }

    let mut content = Column::new().spacing(spacing::LG).push(greeting(&ctx));
    for group in PhotoGroup::ALL {
        content = content.push(section(&ctx, group));
    }

    content.width(Length::Fill).into()
}

/// Greeting header naming the participant and the trip.
fn greeting<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr_with_args(
        "greeting-title",
        &[("name", ctx.session.person_name.as_str())],
    ))
    .size(typography::TITLE_MD);

    let subtitle = Text::new(ctx.i18n.tr_with_args(
        "greeting-subtitle",
        &[("trip", ctx.session.trip_name.as_str())],
    ))
    .size(typography::BODY)
    .style(|_theme: &Theme| text::Style {
        color: Some(palette::TEXT_MUTED),
    });

    Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(subtitle)
        .into()
}

/// Build one titled section: header row plus card grid or empty line.
fn section<'a>(ctx: &ViewContext<'a>, group: PhotoGroup) -> Element<'a, Message> {
    let photos = ctx.session.photos(group);
    let selected = ctx.selection.count(group);

    let title = Text::new(ctx.i18n.tr(group.title_key())).size(typography::TITLE_SM);

    let count_label = ctx.i18n.tr_with_args(
        "section-selected-count",
        &[
            ("selected", &selected.to_string()),
            ("total", &photos.len().to_string()),
        ],
    );
    let count = Text::new(count_label)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::TEXT_MUTED),
        });

    let toggle_key = if ctx.selection.holds_entire(group, photos) {
        "section-clear-all"
    } else {
        "section-select-all"
    };
    let mut toggle_all = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);
    if ctx.interactive && !photos.is_empty() {
        toggle_all = toggle_all.on_press(Message::SelectAllPressed(group));
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(count)
        .push(space::horizontal())
        .push(toggle_all);

    let body: Element<'a, Message> = if photos.is_empty() {
        Text::new(ctx.i18n.tr(group.empty_key()))
            .size(typography::BODY_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::TEXT_MUTED),
            })
            .into()
    } else {
        grid(ctx, group, photos)
    };

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(body)
        .into()
}

/// Lay the section's cards out in fixed-width rows.
fn grid<'a>(ctx: &ViewContext<'a>, group: PhotoGroup, photos: &'a [String]) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::SM);

    for chunk in photos.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for url in chunk {
            row = row.push(card(ctx, group, url));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Build one selectable card: thumbnail area plus checkbox.
fn card<'a>(ctx: &ViewContext<'a>, group: PhotoGroup, url: &'a str) -> Element<'a, Message> {
    let selected = ctx.selection.is_selected(group, url);

    let thumb: Element<'a, Message> = match ctx.thumbnails.get(url) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => thumbnail_frame(
            Text::new(ctx.i18n.tr("thumbnail-failed"))
                .size(typography::CAPTION)
                .into(),
        ),
        Some(Thumbnail::Loading) | None => thumbnail_frame(
            AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                .with_size(sizing::ICON_MD)
                .into_element(),
        ),
    };

    let mut tick = checkbox(selected);
    if ctx.interactive {
        let toggle_group = group;
        let toggle_url = url.to_string();
        tick = tick.on_toggle(move |_| Message::CardPressed(toggle_group, toggle_url.clone()));
    }

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumb)
        .push(tick);

    let card = Container::new(content)
        .padding(spacing::XS)
        .style(styles::container::card(selected));

    if ctx.interactive {
        mouse_area(card)
            .on_press(Message::CardPressed(group, url.to_string()))
            .into()
    } else {
        card.into()
    }
}

/// Fixed-size placeholder frame used for loading and failed thumbnails.
fn thumbnail_frame<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail_frame)
        .into()
}

/// Whole-screen state for a session with no photos at all.
fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("session-empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("session-empty-body"))
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::TEXT_MUTED),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
