//! MusicBrainz search response types.
//!
//! Only the fields the song lookup needs are modelled; everything else in
//! the response is ignored.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Release;

/// Body of `GET /release/?query=...&fmt=json`
#[derive(Debug, Deserialize)]
pub struct ReleaseSearchResponse {
    /// Matching releases, absent when the service found nothing
    #[serde(default)]
    pub releases: Option<Vec<MbRelease>>,
}

/// A single release entry in a search response
#[derive(Debug, Deserialize)]
pub struct MbRelease {
    /// Release title
    #[serde(default)]
    pub title: Option<String>,
    /// Release date in `YYYY-MM-DD`, `YYYY-MM` or `YYYY` form
    #[serde(default)]
    pub date: Option<String>,
}

impl ReleaseSearchResponse {
    /// Convert to releases in response order.
    ///
    /// An entry without a title fails the whole response, so the artist
    /// contributes no songs rather than a partial list.
    pub fn into_releases(self) -> Result<Vec<Release>> {
        self.releases
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(idx, r)| {
                let title = r
                    .title
                    .ok_or_else(|| Error::parse(format!("Release entry {idx} has no title")))?;
                Ok(Release { title, date: r.date })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_search_response_in_order() {
        let body = r#"{
            "created": "2024-01-01T00:00:00.000Z",
            "count": 2,
            "releases": [
                {"id": "a", "score": 100, "title": "Parklife", "date": "1994-03-21"},
                {"id": "c", "score": 97, "title": "Song 2", "date": null}
            ]
        }"#;
        let response: ReleaseSearchResponse = serde_json::from_str(body).unwrap();
        let releases = response.into_releases().unwrap();
        assert_eq!(
            releases,
            vec![
                Release::new("Parklife", Some("1994-03-21")),
                Release::new("Song 2", None),
            ]
        );
    }

    #[test]
    fn entry_without_title_fails_the_response() {
        let body = r#"{
            "releases": [
                {"title": "Parklife", "date": "1994"},
                {"date": "1995"},
                {"title": "Song 2"}
            ]
        }"#;
        let response: ReleaseSearchResponse = serde_json::from_str(body).unwrap();
        let err = response.into_releases().unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "unexpected error: {err}");
        assert!(err.to_string().contains("no title"));
    }

    #[test]
    fn missing_releases_array_is_empty() {
        let response: ReleaseSearchResponse =
            serde_json::from_str(r#"{"error": "nothing"}"#).unwrap();
        assert!(response.releases.is_none());
        assert!(response.into_releases().unwrap().is_empty());
    }
}
