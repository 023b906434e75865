// SPDX-License-Identifier: MPL-2.0
//! HTTP plumbing for the photo service.
//!
//! This module provides:
//! - The shared HTTP client used by every network operation
//! - Fetching a photo session for a share link
//! - Fetching photo bytes for gallery thumbnails
//!
//! Sequential download runs live in [`download`], share-link parsing in
//! [`share_link`].

pub mod download;
pub mod share_link;

use crate::error::SessionError;
use crate::session::{PhotoSession, SessionKey};
use serde::Deserialize;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("TripShare/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by session loads, thumbnails, and runs.
///
/// Client options are fixed at startup; if the builder rejects them the
/// stock client is used instead.
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("HTTP client options rejected ({err}), using defaults");
            reqwest::Client::new()
        })
}

/// Wire shape of the view-photos endpoint.
///
/// Missing arrays deserialize as empty lists; the service omits them for
/// participants without photos of that kind.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SessionDto {
    person_name: String,
    trip_name: String,
    self_photos: Vec<String>,
    group_photos: Vec<String>,
}

impl SessionDto {
    /// Converts the wire shape into the domain session.
    ///
    /// Service-relative photo URLs are absolutized against `base_url` here,
    /// once, so the rest of the app only ever sees absolute URLs.
    fn into_session(self, base_url: &str) -> PhotoSession {
        PhotoSession {
            person_name: self.person_name,
            trip_name: self.trip_name,
            self_photos: absolutize_all(self.self_photos, base_url),
            group_photos: absolutize_all(self.group_photos, base_url),
        }
    }
}

fn absolutize_all(urls: Vec<String>, base_url: &str) -> Vec<String> {
    urls.into_iter()
        .map(|url| absolutize(&url, base_url))
        .collect()
}

fn absolutize(url: &str, base_url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{}{}", base_url, url)
    } else {
        format!("{}/{}", base_url, url)
    }
}

/// Fetches the photo session for one load request.
///
/// `GET {base_url}/api/participants/view-photos/{person_id}`, with a
/// `tripId` query parameter when the key carries a trip.
///
/// # Errors
///
/// Returns a [`SessionError`] describing what went wrong; the caller maps
/// it to a localized message via `i18n_key()`.
pub async fn fetch_session(
    client: &reqwest::Client,
    base_url: &str,
    key: &SessionKey,
) -> Result<PhotoSession, SessionError> {
    let url = format!(
        "{}/api/participants/view-photos/{}",
        base_url, key.person_id
    );

    let mut request = client.get(&url);
    if let Some(trip_id) = &key.trip_id {
        request = request.query(&[("tripId", trip_id)]);
    }

    let response = request
        .send()
        .await
        .map_err(|e| SessionError::from_transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SessionError::from_status(status.as_u16()));
    }

    let dto: SessionDto = response
        .json()
        .await
        .map_err(|e| SessionError::MalformedResponse(e.to_string()))?;

    Ok(dto.into_session(base_url))
}

/// Fetches one photo for thumbnail display.
///
/// # Errors
///
/// Returns a [`SessionError`] on transport failure or non-success status.
pub async fn fetch_photo(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<u8>, SessionError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SessionError::from_transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SessionError::from_status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SessionError::from_transport(&e))?;

    Ok(bytes.to_vec())
}
