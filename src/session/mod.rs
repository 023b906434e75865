// SPDX-License-Identifier: MPL-2.0
//! Photo session domain types.
//!
//! A session is what one share link resolves to: the participant's name,
//! the trip name, and the two photo collections the service keeps for them
//! (solo shots and group shots). Sessions are immutable once loaded; the
//! mutable part of the screen (which photos are ticked) lives in
//! [`Selection`].

pub mod selection;

pub use selection::Selection;

use std::fmt;

/// The two photo collections a session carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoGroup {
    /// Photos showing only the participant.
    Solo,
    /// Photos showing the whole group.
    Group,
}

impl PhotoGroup {
    /// Both groups, in display order.
    pub const ALL: [PhotoGroup; 2] = [PhotoGroup::Solo, PhotoGroup::Group];

    /// i18n key for the section title.
    pub fn title_key(self) -> &'static str {
        match self {
            PhotoGroup::Solo => "section-self-title",
            PhotoGroup::Group => "section-group-title",
        }
    }

    /// i18n key for the empty-section line.
    pub fn empty_key(self) -> &'static str {
        match self {
            PhotoGroup::Solo => "section-empty-self",
            PhotoGroup::Group => "section-empty-group",
        }
    }
}

/// Identity of one load request.
///
/// Results are only applied when their key matches the most recently issued
/// load; anything else is stale and gets dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub person_id: String,
    pub trip_id: Option<String>,
}

impl SessionKey {
    #[must_use]
    pub fn new(person_id: impl Into<String>, trip_id: Option<String>) -> Self {
        Self {
            person_id: person_id.into(),
            trip_id,
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trip_id {
            Some(trip) => write!(f, "person {} (trip {})", self.person_id, trip),
            None => write!(f, "person {}", self.person_id),
        }
    }
}

/// Immutable result of a successful session load.
///
/// Photo URLs keep the order the service sent them in; the gallery renders
/// them in that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoSession {
    pub person_name: String,
    pub trip_name: String,
    pub self_photos: Vec<String>,
    pub group_photos: Vec<String>,
}

impl PhotoSession {
    /// The photo list for one group.
    #[must_use]
    pub fn photos(&self, group: PhotoGroup) -> &[String] {
        match group {
            PhotoGroup::Solo => &self.self_photos,
            PhotoGroup::Group => &self.group_photos,
        }
    }

    /// Whether the session has no photos at all.
    ///
    /// Both lists empty is a valid, renderable session; the gallery shows
    /// a whole-screen empty state for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.self_photos.is_empty() && self.group_photos.is_empty()
    }

    /// Total photo count across both groups.
    #[must_use]
    pub fn total_photos(&self) -> usize {
        self.self_photos.len() + self.group_photos.len()
    }

    /// All photo URLs, solos first, in service order.
    pub fn all_photos(&self) -> impl Iterator<Item = &String> {
        self.self_photos.iter().chain(self.group_photos.iter())
    }
}
