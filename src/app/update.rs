// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to. Each handler takes an [`UpdateContext`] of borrowed app
//! state and returns the follow-up [`Task`].

use super::config::Config;
use super::{persisted_state, Message, Stage};
use crate::error::SessionError;
use crate::i18n::fluent::I18n;
use crate::net::download::{RunEvent, RunReport};
use crate::net::{self, download, share_link};
use crate::session::{PhotoSession, Selection, SessionKey};
use crate::ui::completion_modal;
use crate::ui::download_bar::{self, RunStatus};
use crate::ui::gallery::{self, Thumbnail};
use crate::ui::link_bar;
use crate::ui::notifications;
use iced::widget::image::Handle;
use iced::Task;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Mutable view of the application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub http: &'a reqwest::Client,
    pub link_input: &'a mut String,
    pub show_invalid_link: &'a mut bool,
    pub stage: &'a mut Stage,
    pub current_key: &'a mut Option<SessionKey>,
    pub selection: &'a mut Selection,
    pub thumbnails: &'a mut HashMap<String, Thumbnail>,
    pub run_status: &'a mut RunStatus,
    pub completed_run: &'a mut Option<RunReport>,
    pub app_state: &'a mut persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles link bar messages (typing and submitting a share link).
pub fn handle_link_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: link_bar::Message,
) -> Task<Message> {
    match link_bar::update(message, ctx.link_input, ctx.show_invalid_link) {
        link_bar::Event::None => Task::none(),
        link_bar::Event::Submit => submit_current_link(ctx),
    }
}

/// Parses the current link input and starts a session load.
///
/// Invalid links only flip the inline error flag; the current session (if
/// any) stays on screen.
pub fn submit_current_link(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match share_link::parse(ctx.link_input) {
        Err(_) => {
            *ctx.show_invalid_link = true;
            Task::none()
        }
        Ok(key) => start_session_load(ctx, key),
    }
}

/// Supersedes the current session and fetches the one behind `key`.
///
/// An active download run is left alone: it works on a queue snapshot and
/// keeps its status line until it finishes.
pub fn start_session_load(ctx: &mut UpdateContext<'_>, key: SessionKey) -> Task<Message> {
    log::info!("Loading session for {}", key);

    *ctx.show_invalid_link = false;
    *ctx.current_key = Some(key.clone());
    *ctx.stage = Stage::Loading;
    if !ctx.run_status.is_running() {
        *ctx.run_status = RunStatus::Idle;
    }
    *ctx.completed_run = None;
    ctx.selection.clear();
    ctx.thumbnails.clear();

    let client = ctx.http.clone();
    let base_url = ctx.config.service_url();
    Task::perform(
        async move {
            let result = net::fetch_session(&client, &base_url, &key).await;
            (key, result)
        },
        |(key, result)| Message::SessionLoaded { key, result },
    )
}

/// Applies a finished session load and kicks off thumbnail fetches.
///
/// Results for a superseded key are dropped so a slow first load cannot
/// overwrite a faster second one.
pub fn handle_session_loaded(
    ctx: &mut UpdateContext<'_>,
    key: SessionKey,
    result: Result<PhotoSession, SessionError>,
) -> Task<Message> {
    if ctx.current_key.as_ref() != Some(&key) {
        log::debug!("Dropping stale session result for {}", key);
        return Task::none();
    }

    match result {
        Ok(session) => {
            log::info!(
                "Session loaded for {}: {} photos",
                key,
                session.total_photos()
            );

            let mut fetches = Vec::with_capacity(session.total_photos());
            for url in session.all_photos() {
                ctx.thumbnails.insert(url.clone(), Thumbnail::Loading);

                let client = ctx.http.clone();
                let url = url.clone();
                let key = key.clone();
                fetches.push(Task::perform(
                    async move {
                        let result = net::fetch_photo(&client, &url).await;
                        (key, url, result)
                    },
                    |(key, url, result)| Message::ThumbnailLoaded { key, url, result },
                ));
            }
            *ctx.stage = Stage::Ready(session);

            // Remember the link that worked for the next start. Loads issued
            // from the command line key flags have no link to remember.
            let link = ctx.link_input.trim();
            if !link.is_empty() {
                ctx.app_state.last_share_link = Some(link.to_string());
                if let Some(warning) = ctx.app_state.save() {
                    ctx.notifications
                        .push(notifications::Notification::warning(&warning));
                }
            }

            Task::batch(fetches)
        }
        Err(err) => {
            log::warn!("Session load failed for {}: {}", key, err);
            *ctx.stage = Stage::Failed(err);
            Task::none()
        }
    }
}

/// Stores one fetched thumbnail, or marks it failed.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    key: SessionKey,
    url: String,
    result: Result<Vec<u8>, SessionError>,
) -> Task<Message> {
    if ctx.current_key.as_ref() != Some(&key) {
        return Task::none();
    }

    let state = match result {
        Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
        Err(err) => {
            log::debug!("Thumbnail failed for {}: {}", url, err);
            Thumbnail::Failed
        }
    };
    ctx.thumbnails.insert(url, state);
    Task::none()
}

/// Handles gallery messages (card clicks and select-all buttons).
///
/// Selection changes are ignored while a run is active; the queue snapshot
/// taken at run start stays authoritative either way.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    if ctx.run_status.is_running() {
        return Task::none();
    }
    let Stage::Ready(session) = &*ctx.stage else {
        return Task::none();
    };

    match gallery::update(message) {
        gallery::Event::Toggle(group, url) => ctx.selection.toggle(group, &url),
        gallery::Event::SelectAll(group) => ctx.selection.select_all(group, session.photos(group)),
    }
    Task::none()
}

/// Handles download bar messages (the download button).
pub fn handle_download_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: download_bar::Message,
) -> Task<Message> {
    match download_bar::update(message) {
        download_bar::Event::Download => request_run(ctx),
    }
}

/// Snapshots the selection queue and opens the destination picker.
///
/// An empty selection never opens the dialog; it only sets the status line.
fn request_run(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.run_status.is_running() {
        return Task::none();
    }

    let queue = ctx.selection.queue();
    if queue.is_empty() {
        *ctx.run_status = RunStatus::NothingSelected;
        return Task::none();
    }

    let title = ctx.i18n.tr("dialog-pick-folder-title");
    let start_directory = ctx
        .app_state
        .last_download_directory
        .clone()
        .or_else(dirs::download_dir);
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(&title);
            if let Some(dir) = start_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            let directory = dialog
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf());
            (queue, directory)
        },
        |(queue, directory)| Message::DestinationPicked { queue, directory },
    )
}

/// Starts the download run once a destination folder is picked.
///
/// A dismissed dialog cancels the request without touching any state.
pub fn handle_destination_picked(
    ctx: &mut UpdateContext<'_>,
    queue: Vec<String>,
    directory: Option<PathBuf>,
) -> Task<Message> {
    let Some(directory) = directory else {
        return Task::none();
    };

    ctx.app_state.set_last_download_directory(&directory);
    if let Some(warning) = ctx.app_state.save() {
        ctx.notifications
            .push(notifications::Notification::warning(&warning));
    }

    log::info!(
        "Starting download run: {} photos into {}",
        queue.len(),
        directory.display()
    );
    *ctx.run_status = RunStatus::Running {
        current: 1,
        total: queue.len(),
    };
    *ctx.completed_run = None;

    start_run(ctx.http.clone(), queue, directory, ctx.config.pacing())
}

/// Spawns the sequential run worker and streams its events back as messages.
///
/// Progress events travel over a bounded channel and may be dropped under
/// pressure; the final report travels over a oneshot and always arrives.
fn start_run(
    client: reqwest::Client,
    queue: Vec<String>,
    destination: PathBuf,
    pacing: Duration,
) -> Task<Message> {
    use iced::futures::channel::{mpsc, oneshot};
    use iced::futures::stream;
    use iced::futures::StreamExt;

    let (event_tx, event_rx) = mpsc::channel::<RunEvent>(100);
    let (report_tx, report_rx) = oneshot::channel::<RunReport>();

    tokio::spawn(async move {
        let mut event_tx = event_tx;
        let report = download::run_queue(&client, &queue, &destination, pacing, |event| {
            let _ = event_tx.try_send(event);
        })
        .await;

        let _ = report_tx.send(report);
        // event_tx is dropped here, closing the channel
    });

    #[allow(clippy::items_after_statements)]
    enum RunPhase {
        Streaming {
            event_rx: mpsc::Receiver<RunEvent>,
            report_rx: oneshot::Receiver<RunReport>,
        },
        Completed,
    }

    let run_stream = stream::unfold(
        RunPhase::Streaming {
            event_rx,
            report_rx,
        },
        |phase| async move {
            match phase {
                RunPhase::Streaming {
                    mut event_rx,
                    report_rx,
                } => match event_rx.next().await {
                    Some(event) => Some((
                        Message::RunEvent(event),
                        RunPhase::Streaming {
                            event_rx,
                            report_rx,
                        },
                    )),
                    None => {
                        // Event channel closed, the report is ready
                        let result = match report_rx.await {
                            Ok(report) => Ok(report),
                            Err(_) => Err("download worker dropped without a report".to_string()),
                        };
                        Some((Message::RunFinished(result), RunPhase::Completed))
                    }
                },
                RunPhase::Completed => None, // Terminate the stream
            }
        },
    );

    Task::stream(run_stream)
}

/// Advances the status line as the run walks its queue.
pub fn handle_run_event(ctx: &mut UpdateContext<'_>, event: RunEvent) -> Task<Message> {
    match event {
        RunEvent::ItemStarted { index, total } => {
            if ctx.run_status.is_running() {
                *ctx.run_status = RunStatus::Running {
                    current: index,
                    total,
                };
            }
        }
        RunEvent::ItemFinished { .. } => {}
    }
    Task::none()
}

/// Applies the finished run: completion modal, status line, and a warning
/// toast when some items failed.
pub fn handle_run_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<RunReport, String>,
) -> Task<Message> {
    match result {
        Ok(report) => {
            log::info!(
                "Download run finished: {} of {} saved",
                report.saved,
                report.attempted
            );
            *ctx.run_status = RunStatus::Complete;
            *ctx.completed_run = Some(report);

            if !report.is_clean() {
                ctx.notifications.push(
                    notifications::Notification::warning("notification-download-partial")
                        .with_arg("failed", report.failed.to_string())
                        .with_arg("attempted", report.attempted.to_string()),
                );
            }
        }
        Err(err) => {
            log::error!("Download run aborted: {}", err);
            *ctx.run_status = RunStatus::Idle;
            ctx.notifications.push(notifications::Notification::error(
                "notification-download-error",
            ));
        }
    }
    Task::none()
}

/// Handles completion modal messages (the close button).
pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: completion_modal::Message,
) -> Task<Message> {
    match completion_modal::update(message) {
        completion_modal::Event::Close => {
            *ctx.completed_run = None;
        }
    }
    Task::none()
}
