// SPDX-License-Identifier: MPL-2.0
//! Integration tests covering configuration, localization, persisted state,
//! and the selection flow as seen from outside the crate.

use std::path::PathBuf;
use std::time::Duration;

use tempfile::tempdir;
use tripshare::app::config::{self, Config, DEFAULT_PACING_MS, DEFAULT_SERVICE_URL};
use tripshare::app::persisted_state::AppState;
use tripshare::i18n::fluent::I18n;
use tripshare::net::share_link;
use tripshare::session::{PhotoGroup, PhotoSession, Selection};

/// Keys rendered without arguments anywhere in the UI.
const PLAIN_KEYS: &[&str] = &[
    "window-title",
    "link-bar-placeholder",
    "link-bar-load",
    "error-link-invalid",
    "welcome-title",
    "welcome-body",
    "loading-session",
    "error-title",
    "error-hint",
    "error-session-unreachable",
    "error-session-timeout",
    "error-session-not-found",
    "error-session-malformed",
    "error-session-general",
    "section-self-title",
    "section-group-title",
    "section-select-all",
    "section-clear-all",
    "section-empty-self",
    "section-empty-group",
    "session-empty-title",
    "session-empty-body",
    "thumbnail-failed",
    "download-button-busy",
    "status-select-at-least-one",
    "status-complete",
    "dialog-pick-folder-title",
    "modal-title",
    "modal-close",
    "notification-download-error",
    "notification-config-load-error",
    "notification-state-parse-error",
    "notification-state-read-error",
    "notification-state-path-error",
    "notification-state-dir-error",
    "notification-state-write-error",
    "notification-state-create-error",
];

/// Keys that interpolate arguments, paired with representative values.
const ARG_KEYS: &[(&str, &[(&str, &str)])] = &[
    ("greeting-title", &[("name", "Alice")]),
    ("greeting-subtitle", &[("trip", "Bali 2025")]),
    (
        "section-selected-count",
        &[("selected", "1"), ("total", "3")],
    ),
    ("download-button", &[("count", "2")]),
    ("status-downloading", &[("current", "1"), ("total", "3")]),
    ("error-session-status", &[("status", "503")]),
    ("modal-saved-count", &[("saved", "2"), ("attempted", "3")]),
    (
        "notification-download-partial",
        &[("failed", "1"), ("attempted", "3")],
    ),
];

#[test]
fn every_locale_covers_every_ui_key() {
    let mut i18n = I18n::default();
    let locales = i18n.available_locales.clone();
    assert!(
        locales.len() >= 2,
        "expected at least the en-US and fr catalogs, got {locales:?}"
    );

    for locale in locales {
        i18n.set_locale(locale.clone());

        for key in PLAIN_KEYS {
            let value = i18n.tr(key);
            assert!(
                !value.starts_with("MISSING:"),
                "locale {locale} is missing key {key}"
            );
        }

        for (key, args) in ARG_KEYS {
            let value = i18n.tr_with_args(key, args);
            assert!(
                !value.starts_with("MISSING:"),
                "locale {locale} is missing key {key} (or its arguments changed)"
            );
        }
    }
}

#[test]
fn status_line_interpolates_counts() {
    let mut i18n = I18n::default();
    i18n.set_locale("en-US".parse().expect("valid locale"));

    let line = i18n.tr_with_args("status-downloading", &[("current", "3"), ("total", "9")]);
    assert_eq!(line, "Downloading photo 3 of 9...");
    assert_eq!(i18n.tr("status-complete"), "All selected photos downloaded.");
}

#[test]
fn language_change_via_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.tr("link-bar-load"), "Charger");

    // The CLI flag outranks the config file
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.tr("link-bar-load"), "Load");
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.service.base_url = Some("http://photos.example.com:8080/".to_string());
    config.service.timeout_secs = Some(5);
    config.downloads.pacing_ms = Some(150);

    config::save_to_path(&config, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");

    assert_eq!(loaded, config);
    // The resolved accessors normalize what the file stores
    assert_eq!(loaded.service_url(), "http://photos.example.com:8080");
    assert_eq!(loaded.request_timeout(), Duration::from_secs(5));
    assert_eq!(loaded.pacing(), Duration::from_millis(150));
}

#[test]
fn partial_config_file_fills_in_defaults() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write partial file");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    assert_eq!(loaded.service_url(), DEFAULT_SERVICE_URL);
    assert_eq!(loaded.pacing(), Duration::from_millis(DEFAULT_PACING_MS));
}

#[test]
fn app_state_round_trips_through_cbor() {
    let dir = tempdir().expect("create temp dir");
    let base = dir.path().to_path_buf();

    let state = AppState {
        last_download_directory: Some(PathBuf::from("/home/user/Pictures/Bali")),
        last_share_link: Some("https://tripshare.example.com/view/42?trip=7".to_string()),
    };
    assert!(state.save_to(Some(base.clone())).is_none());

    let (loaded, warning) = AppState::load_from(Some(base));
    assert!(warning.is_none());
    assert_eq!(loaded, state);
}

#[test]
fn share_link_to_session_key_flow() {
    let key = share_link::parse("https://tripshare.example.com/view/42?trip=7")
        .expect("parse share link");
    assert_eq!(key.person_id, "42");
    assert_eq!(key.trip_id.as_deref(), Some("7"));

    // A bare host/path paste works too
    let bare = share_link::parse("tripshare.example.com/view/42").expect("parse bare link");
    assert_eq!(bare.person_id, "42");
    assert!(bare.trip_id.is_none());
}

fn sample_session() -> PhotoSession {
    PhotoSession {
        person_name: "Alice".to_string(),
        trip_name: "Bali 2025".to_string(),
        self_photos: vec![
            "http://h/solo_1.jpg".to_string(),
            "http://h/solo_2.jpg".to_string(),
            "http://h/solo_3.jpg".to_string(),
        ],
        group_photos: vec![
            "http://h/group_1.jpg".to_string(),
            "http://h/group_2.jpg".to_string(),
        ],
    }
}

#[test]
fn selection_flow_builds_the_download_queue() {
    let session = sample_session();
    let mut selection = Selection::new();

    // Tick one group shot first, then everything solo
    selection.toggle(PhotoGroup::Group, &session.group_photos[1]);
    selection.select_all(PhotoGroup::Solo, session.photos(PhotoGroup::Solo));

    assert_eq!(selection.total(), 4);

    // Solos come first regardless of ticking order
    let queue = selection.queue();
    assert_eq!(
        queue,
        vec![
            "http://h/solo_1.jpg".to_string(),
            "http://h/solo_2.jpg".to_string(),
            "http://h/solo_3.jpg".to_string(),
            "http://h/group_2.jpg".to_string(),
        ]
    );
}

#[test]
fn select_all_toggles_off_when_everything_is_ticked() {
    let session = sample_session();
    let mut selection = Selection::new();

    selection.select_all(PhotoGroup::Solo, session.photos(PhotoGroup::Solo));
    assert!(selection.holds_entire(PhotoGroup::Solo, session.photos(PhotoGroup::Solo)));

    selection.select_all(PhotoGroup::Solo, session.photos(PhotoGroup::Solo));
    assert_eq!(selection.count(PhotoGroup::Solo), 0);
    assert!(selection.queue().is_empty());
}
