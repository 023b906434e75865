// SPDX-License-Identifier: MPL-2.0
//! Photo selection state.
//!
//! Two independent ordered sets, one per [`PhotoGroup`], holding photo URLs
//! in the order the user ticked them. The download queue is derived from
//! here and nowhere else.

use super::PhotoGroup;

/// Which photos are currently ticked, per group, in insertion order.
///
/// A URL appears in a set at most once, so the derived queue can never
/// contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    solo: Vec<String>,
    group: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, group: PhotoGroup) -> &Vec<String> {
        match group {
            PhotoGroup::Solo => &self.solo,
            PhotoGroup::Group => &self.group,
        }
    }

    fn set_mut(&mut self, group: PhotoGroup) -> &mut Vec<String> {
        match group {
            PhotoGroup::Solo => &mut self.solo,
            PhotoGroup::Group => &mut self.group,
        }
    }

    /// Ticks or unticks one photo.
    ///
    /// An absent URL is appended at the end; a present one is removed and
    /// the order of the remaining items is preserved.
    pub fn toggle(&mut self, group: PhotoGroup, url: &str) {
        let set = self.set_mut(group);
        if let Some(position) = set.iter().position(|selected| selected == url) {
            set.remove(position);
        } else {
            set.push(url.to_string());
        }
    }

    /// Selects the whole list, or clears the set when it already holds as
    /// many items as the list.
    ///
    /// Length equality is the toggle criterion; a full set is replaced by
    /// nothing, anything else is replaced by `urls` in list order.
    pub fn select_all(&mut self, group: PhotoGroup, urls: &[String]) {
        let set = self.set_mut(group);
        if set.len() == urls.len() {
            set.clear();
        } else {
            *set = urls.to_vec();
        }
    }

    /// Empties both sets.
    pub fn clear(&mut self) {
        self.solo.clear();
        self.group.clear();
    }

    /// Whether one photo is currently ticked.
    #[must_use]
    pub fn is_selected(&self, group: PhotoGroup, url: &str) -> bool {
        self.set(group).iter().any(|selected| selected == url)
    }

    /// Ticked count for one group.
    #[must_use]
    pub fn count(&self, group: PhotoGroup) -> usize {
        self.set(group).len()
    }

    /// Ticked count across both groups. Drives the action button label.
    #[must_use]
    pub fn total(&self) -> usize {
        self.solo.len() + self.group.len()
    }

    /// Whether the set holds the entire (non-empty) list.
    ///
    /// Used for the "Select all" / "Clear all" button label.
    #[must_use]
    pub fn holds_entire(&self, group: PhotoGroup, urls: &[String]) -> bool {
        !urls.is_empty() && self.set(group).len() == urls.len()
    }

    /// The download queue: selected solos first, then selected group shots,
    /// each in insertion order.
    #[must_use]
    pub fn queue(&self) -> Vec<String> {
        let mut queue = Vec::with_capacity(self.total());
        queue.extend(self.solo.iter().cloned());
        queue.extend(self.group.iter().cloned());
        queue
    }
}
