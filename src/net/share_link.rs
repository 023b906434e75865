// SPDX-License-Identifier: MPL-2.0
//! Share-link parsing.
//!
//! A share link is the URL a participant receives after a trip, e.g.
//! `https://tripshare.example.com/view/42?trip=7`. The path must contain a
//! `view` segment followed by the person id; the query may carry the trip
//! id under `trip` (or `tripId`, which the web app also produces).

use crate::error::SessionError;
use crate::session::SessionKey;
use reqwest::Url;

/// Parses a pasted share link into a [`SessionKey`].
///
/// Links without a scheme are retried with `https://` prefixed, so a bare
/// `tripshare.example.com/view/42` pastes fine.
///
/// # Errors
///
/// Returns [`SessionError::InvalidLink`] when the input is empty, is not a
/// URL, or has no person segment after `view`.
pub fn parse(link: &str) -> Result<SessionKey, SessionError> {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidLink);
    }

    let url = if trimmed.contains("://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("https://{}", trimmed))
    }
    .map_err(|_| SessionError::InvalidLink)?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|parts| parts.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();

    let view_position = segments
        .iter()
        .position(|segment| *segment == "view")
        .ok_or(SessionError::InvalidLink)?;

    let person_id = segments
        .get(view_position + 1)
        .ok_or(SessionError::InvalidLink)?;

    let trip_id = url
        .query_pairs()
        .find(|(key, _)| key == "trip" || key == "tripId")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    Ok(SessionKey::new(person_id.to_string(), trip_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_person_and_trip() {
        let key = parse("https://tripshare.example.com/view/42?trip=7").expect("valid link");
        assert_eq!(key.person_id, "42");
        assert_eq!(key.trip_id.as_deref(), Some("7"));
    }

    #[test]
    fn accepts_trip_id_alias() {
        let key = parse("https://tripshare.example.com/view/42?tripId=7").expect("valid link");
        assert_eq!(key.trip_id.as_deref(), Some("7"));
    }

    #[test]
    fn trip_is_optional() {
        let key = parse("https://tripshare.example.com/view/42").expect("valid link");
        assert_eq!(key.person_id, "42");
        assert!(key.trip_id.is_none());
    }

    #[test]
    fn accepts_scheme_less_links() {
        let key = parse("tripshare.example.com/view/42?trip=7").expect("valid link");
        assert_eq!(key.person_id, "42");
        assert_eq!(key.trip_id.as_deref(), Some("7"));
    }

    #[test]
    fn tolerates_trailing_slash() {
        let key = parse("https://tripshare.example.com/view/42/").expect("valid link");
        assert_eq!(key.person_id, "42");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let key = parse("  https://tripshare.example.com/view/42  ").expect("valid link");
        assert_eq!(key.person_id, "42");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse("   "), Err(SessionError::InvalidLink)));
    }

    #[test]
    fn rejects_links_without_view_segment() {
        assert!(matches!(
            parse("https://tripshare.example.com/photos/42"),
            Err(SessionError::InvalidLink)
        ));
    }

    #[test]
    fn rejects_view_without_person() {
        assert!(matches!(
            parse("https://tripshare.example.com/view"),
            Err(SessionError::InvalidLink)
        ));
        assert!(matches!(
            parse("https://tripshare.example.com/view/"),
            Err(SessionError::InvalidLink)
        ));
    }

    #[test]
    fn rejects_non_url_input() {
        assert!(matches!(
            parse("not a link at all"),
            Err(SessionError::InvalidLink)
        ));
    }

    #[test]
    fn ignores_empty_trip_value() {
        let key = parse("https://tripshare.example.com/view/42?trip=").expect("valid link");
        assert!(key.trip_id.is_none());
    }

    #[test]
    fn ignores_unrelated_query_parameters() {
        let key =
            parse("https://tripshare.example.com/view/42?utm_source=mail&trip=7").expect("valid");
        assert_eq!(key.trip_id.as_deref(), Some("7"));
    }
}
