// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SessionError;
use crate::net::download::{RunEvent, RunReport};
use crate::session::{PhotoSession, SessionKey};
use crate::ui::completion_modal;
use crate::ui::download_bar;
use crate::ui::gallery;
use crate::ui::link_bar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    LinkBar(link_bar::Message),
    Gallery(gallery::Message),
    DownloadBar(download_bar::Message),
    Modal(completion_modal::Message),
    Notification(notifications::NotificationMessage),
    /// Result of loading the session for `key`. Stale keys are dropped.
    SessionLoaded {
        key: SessionKey,
        result: Result<PhotoSession, SessionError>,
    },
    /// Result of fetching one thumbnail for the session behind `key`.
    ThumbnailLoaded {
        key: SessionKey,
        url: String,
        result: Result<Vec<u8>, SessionError>,
    },
    /// Result of the destination folder dialog; `queue` is the selection
    /// snapshot taken when the run was requested.
    DestinationPicked {
        queue: Vec<String>,
        directory: Option<PathBuf>,
    },
    /// Progress event from the active download run.
    RunEvent(RunEvent),
    /// Final result of the download run.
    RunFinished(Result<RunReport, String>),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional share link to load on startup.
    pub share_link: Option<String>,
    /// Optional person id to load on startup without a share link.
    pub person: Option<String>,
    /// Optional trip id accompanying `person`.
    pub trip: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `TRIPSHARE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TRIPSHARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
