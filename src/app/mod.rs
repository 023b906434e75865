// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the link bar, the
//! galleries, and the download run.
//!
//! The `App` struct wires together the domains (session, selection,
//! downloads, localization) and translates messages into side effects like
//! network fetches or state persistence. This file intentionally keeps
//! policy decisions (window sizing, startup link handling, theming) close
//! to the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::SessionError;
use crate::i18n::fluent::I18n;
use crate::net;
use crate::net::download::RunReport;
use crate::session::{PhotoSession, Selection, SessionKey};
use crate::ui::download_bar::RunStatus;
use crate::ui::gallery::Thumbnail;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::f32::consts::PI;
use std::fmt;

/// Radians added to the spinner angle per animation tick.
const SPINNER_SPEED: f32 = 0.1;

/// Lifecycle of the session behind the current share link.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Stage {
    /// No link loaded yet.
    #[default]
    Welcome,
    /// A session fetch is in flight.
    Loading,
    /// The last fetch failed.
    Failed(SessionError),
    /// Photos are on screen.
    Ready(PhotoSession),
}

/// Root Iced application state that bridges UI components, localization,
/// and persisted state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    http: reqwest::Client,
    /// Current contents of the link bar input.
    link_input: String,
    /// Whether the inline invalid-link error is showing.
    show_invalid_link: bool,
    stage: Stage,
    /// Identity of the most recent load; stale results are dropped.
    current_key: Option<SessionKey>,
    selection: Selection,
    /// Thumbnail state per photo URL for the current session.
    thumbnails: HashMap<String, Thumbnail>,
    run_status: RunStatus,
    /// Report of the finished run while the completion modal is open.
    completed_run: Option<RunReport>,
    /// Shared angle for every spinner on screen.
    spinner_rotation: f32,
    /// Persisted application state (last link, last download folder).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("stage", &self.stage)
            .field("selected", &self.selection.total())
            .field("run_status", &self.run_status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let http = net::build_client(config.request_timeout());
        Self {
            i18n: I18n::default(),
            config,
            http,
            link_input: String::new(),
            show_invalid_link: false,
            stage: Stage::Welcome,
            current_key: None,
            selection: Selection::new(),
            thumbnails: HashMap::new(),
            run_status: RunStatus::Idle,
            completed_run: None,
            spinner_rotation: 0.0,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the session
    /// load for a share link passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let http = net::build_client(config.request_timeout());

        let mut app = App {
            i18n,
            http,
            config,
            ..Self::default()
        };

        // Load application state (last link, last download folder)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = if let Some(link) = flags.share_link {
            // A link on the command line loads right away
            app.link_input = link;
            let mut ctx = app.update_context();
            update::submit_current_link(&mut ctx)
        } else if let Some(person) = flags.person {
            // An explicit person/trip pair loads without a link
            let key = SessionKey::new(person, flags.trip);
            let mut ctx = app.update_context();
            update::start_session_load(&mut ctx, key)
        } else {
            // Otherwise the last successful link only pre-fills the bar
            if let Some(link) = &app.app_state.last_share_link {
                app.link_input = link.clone();
            }
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.stage {
            Stage::Ready(session) if !session.trip_name.is_empty() => {
                format!("{} - {}", session.trip_name, app_name)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_loading_session = matches!(self.stage, Stage::Loading);
        let has_pending_thumbnails = self
            .thumbnails
            .values()
            .any(|thumbnail| matches!(thumbnail, Thumbnail::Loading));

        subscription::create_tick_subscription(
            is_loading_session,
            has_pending_thumbnails,
            self.notifications.has_notifications(),
        )
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            http: &self.http,
            link_input: &mut self.link_input,
            show_invalid_link: &mut self.show_invalid_link,
            stage: &mut self.stage,
            current_key: &mut self.current_key,
            selection: &mut self.selection,
            thumbnails: &mut self.thumbnails,
            run_status: &mut self.run_status,
            completed_run: &mut self.completed_run,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::LinkBar(link_bar_message) => {
                update::handle_link_bar_message(&mut ctx, link_bar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::DownloadBar(download_bar_message) => {
                update::handle_download_bar_message(&mut ctx, download_bar_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::SessionLoaded { key, result } => {
                update::handle_session_loaded(&mut ctx, key, result)
            }
            Message::ThumbnailLoaded { key, url, result } => {
                update::handle_thumbnail_loaded(&mut ctx, key, url, result)
            }
            Message::DestinationPicked { queue, directory } => {
                update::handle_destination_picked(&mut ctx, queue, directory)
            }
            Message::RunEvent(event) => update::handle_run_event(&mut ctx, event),
            Message::RunFinished(result) => update::handle_run_finished(&mut ctx, result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % (2.0 * PI);

                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            link_input: &self.link_input,
            show_invalid_link: self.show_invalid_link,
            stage: &self.stage,
            selection: &self.selection,
            thumbnails: &self.thumbnails,
            run_status: self.run_status,
            completed_run: self.completed_run.as_ref(),
            spinner_rotation: self.spinner_rotation,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PhotoGroup;
    use crate::ui::gallery;
    use crate::ui::link_bar;

    fn ready_app() -> App {
        let mut app = App::default();
        app.stage = Stage::Ready(PhotoSession {
            person_name: "Alice".to_string(),
            trip_name: "Bali 2025".to_string(),
            self_photos: vec![
                "http://h/a.jpg".to_string(),
                "http://h/b.jpg".to_string(),
            ],
            group_photos: vec!["http://h/g.jpg".to_string()],
        });
        app
    }

    #[test]
    fn typing_clears_the_invalid_link_error() {
        let mut app = App::default();
        app.show_invalid_link = true;

        let _task = app.update(Message::LinkBar(link_bar::Message::InputChanged(
            "https://tripshare.example.com/view/42".to_string(),
        )));

        assert!(!app.show_invalid_link);
        assert_eq!(app.link_input, "https://tripshare.example.com/view/42");
    }

    #[test]
    fn submitting_garbage_flags_the_link_bar() {
        let mut app = App::default();
        app.link_input = "not a link".to_string();

        let _task = app.update(Message::LinkBar(link_bar::Message::Submitted));

        assert!(app.show_invalid_link);
        // The stage stays untouched so a loaded session would survive a typo
        assert_eq!(app.stage, Stage::Welcome);
    }

    #[test]
    fn submitting_a_link_enters_the_loading_stage() {
        let mut app = App::default();
        app.link_input = "https://tripshare.example.com/view/42?trip=7".to_string();

        let _task = app.update(Message::LinkBar(link_bar::Message::Submitted));

        assert_eq!(app.stage, Stage::Loading);
        assert_eq!(
            app.current_key,
            Some(SessionKey::new("42", Some("7".to_string())))
        );
    }

    #[test]
    fn submitting_during_a_run_keeps_the_run_alive() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 1,
            total: 3,
        };
        app.selection.toggle(PhotoGroup::Solo, "http://h/a.jpg");
        app.link_input = "https://tripshare.example.com/view/43".to_string();

        let _task = app.update(Message::LinkBar(link_bar::Message::Submitted));

        // The new load supersedes the session, not the run
        assert_eq!(app.stage, Stage::Loading);
        assert_eq!(app.current_key, Some(SessionKey::new("43", None)));
        assert_eq!(
            app.run_status,
            RunStatus::Running {
                current: 1,
                total: 3
            }
        );
        assert_eq!(app.selection.total(), 0);
    }

    #[test]
    fn explicit_person_key_loads_without_a_link() {
        let mut app = App::default();

        let mut ctx = app.update_context();
        let _task = update::start_session_load(
            &mut ctx,
            SessionKey::new("42", Some("7".to_string())),
        );

        assert_eq!(app.stage, Stage::Loading);
        assert_eq!(
            app.current_key,
            Some(SessionKey::new("42", Some("7".to_string())))
        );
        assert!(app.link_input.is_empty());
    }

    #[test]
    fn stale_session_results_are_dropped() {
        let mut app = App::default();
        app.stage = Stage::Loading;
        app.current_key = Some(SessionKey::new("42", None));

        let _task = app.update(Message::SessionLoaded {
            key: SessionKey::new("41", None),
            result: Ok(PhotoSession::default()),
        });

        // The old key's result must not leave the loading stage
        assert_eq!(app.stage, Stage::Loading);
    }

    #[test]
    fn failed_session_load_shows_the_error_stage() {
        let mut app = App::default();
        app.stage = Stage::Loading;
        app.current_key = Some(SessionKey::new("42", None));

        let _task = app.update(Message::SessionLoaded {
            key: SessionKey::new("42", None),
            result: Err(SessionError::NotFound),
        });

        assert!(matches!(app.stage, Stage::Failed(SessionError::NotFound)));
    }

    #[test]
    fn gallery_toggle_updates_the_selection() {
        let mut app = ready_app();

        let _task = app.update(Message::Gallery(gallery::Message::CardPressed(
            PhotoGroup::Solo,
            "http://h/a.jpg".to_string(),
        )));

        assert_eq!(app.selection.total(), 1);
        assert!(app.selection.is_selected(PhotoGroup::Solo, "http://h/a.jpg"));
    }

    #[test]
    fn select_all_covers_the_whole_section() {
        let mut app = ready_app();

        let _task = app.update(Message::Gallery(gallery::Message::SelectAllPressed(
            PhotoGroup::Solo,
        )));
        assert_eq!(app.selection.count(PhotoGroup::Solo), 2);

        // A second press clears the section again
        let _task = app.update(Message::Gallery(gallery::Message::SelectAllPressed(
            PhotoGroup::Solo,
        )));
        assert_eq!(app.selection.count(PhotoGroup::Solo), 0);
    }

    #[test]
    fn selection_is_frozen_while_a_run_is_active() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 1,
            total: 3,
        };

        let _task = app.update(Message::Gallery(gallery::Message::CardPressed(
            PhotoGroup::Solo,
            "http://h/a.jpg".to_string(),
        )));

        assert_eq!(app.selection.total(), 0);
    }

    #[test]
    fn download_with_empty_selection_only_sets_the_status_line() {
        let mut app = ready_app();

        let _task = app.update(Message::DownloadBar(
            crate::ui::download_bar::Message::DownloadPressed,
        ));

        assert_eq!(app.run_status, RunStatus::NothingSelected);
        assert!(app.completed_run.is_none());
    }

    #[test]
    fn dismissed_destination_dialog_cancels_the_run() {
        let mut app = ready_app();

        let _task = app.update(Message::DestinationPicked {
            queue: vec!["http://h/a.jpg".to_string()],
            directory: None,
        });

        assert_eq!(app.run_status, RunStatus::Idle);
        assert!(app.app_state.last_download_directory.is_none());
    }

    #[test]
    fn run_events_advance_the_status_line() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 1,
            total: 3,
        };

        let _task = app.update(Message::RunEvent(
            crate::net::download::RunEvent::ItemStarted { index: 2, total: 3 },
        ));

        assert_eq!(
            app.run_status,
            RunStatus::Running {
                current: 2,
                total: 3
            }
        );
    }

    #[test]
    fn clean_run_opens_the_modal_without_toasts() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 3,
            total: 3,
        };

        let report = RunReport {
            attempted: 3,
            saved: 3,
            failed: 0,
        };
        let _task = app.update(Message::RunFinished(Ok(report)));

        assert_eq!(app.run_status, RunStatus::Complete);
        assert_eq!(app.completed_run, Some(report));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn partial_run_opens_the_modal_and_warns() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 3,
            total: 3,
        };

        let report = RunReport {
            attempted: 3,
            saved: 1,
            failed: 2,
        };
        let _task = app.update(Message::RunFinished(Ok(report)));

        assert_eq!(app.completed_run, Some(report));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn closing_the_modal_keeps_the_complete_status() {
        let mut app = ready_app();
        app.run_status = RunStatus::Complete;
        app.completed_run = Some(RunReport {
            attempted: 2,
            saved: 2,
            failed: 0,
        });

        let _task = app.update(Message::Modal(
            crate::ui::completion_modal::Message::CloseRequested,
        ));

        assert!(app.completed_run.is_none());
        assert_eq!(app.run_status, RunStatus::Complete);
    }

    #[test]
    fn aborted_run_unfreezes_the_ui() {
        let mut app = ready_app();
        app.run_status = RunStatus::Running {
            current: 1,
            total: 2,
        };

        let _task = app.update(Message::RunFinished(Err("worker gone".to_string())));

        assert_eq!(app.run_status, RunStatus::Idle);
        assert!(app.completed_run.is_none());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn tick_wraps_the_spinner_angle() {
        let mut app = App::default();
        app.spinner_rotation = 2.0 * PI - 0.05;

        let _task = app.update(Message::Tick(std::time::Instant::now()));

        assert!(app.spinner_rotation < 2.0 * PI);
    }

    #[test]
    fn title_names_the_loaded_trip() {
        let app = ready_app();
        let title = app.title();
        assert!(title.contains("Bali 2025"));
    }

    #[test]
    fn view_renders_in_every_stage() {
        let mut app = App::default();
        let _ = app.view();

        app.stage = Stage::Loading;
        let _ = app.view();

        app.stage = Stage::Failed(SessionError::Timeout);
        let _ = app.view();

        let app = ready_app();
        let _element = app.view();
    }
}
