//! Song lookup: artist name to distinct single titles with release years.

use std::collections::HashSet;

use crate::constants::lookup::{DEFAULT_RELEASE_YEAR, REMIX_MARKER};
use crate::error::Result;
use crate::services::ReleaseSource;
use crate::types::{Release, SongCandidate};

/// Year from a release date, taking the first four characters of longer dates.
///
/// Missing or unparseable dates yield the default year (2000).
pub fn parse_release_year(date: Option<&str>) -> i32 {
    let Some(date) = date else {
        return DEFAULT_RELEASE_YEAR;
    };

    let year = if date.chars().count() > 4 {
        date.chars().take(4).collect::<String>()
    } else {
        date.to_string()
    };

    year.parse().unwrap_or_else(|_| {
        tracing::debug!(date = %date, "Unparseable release date, using default year");
        DEFAULT_RELEASE_YEAR
    })
}

fn is_remix(title: &str) -> bool {
    title.to_lowercase().contains(REMIX_MARKER)
}

/// Reduce releases to distinct titles, first occurrence wins.
///
/// Remixes are dropped before the duplicate check.
pub fn collect_candidates(releases: Vec<Release>) -> Vec<SongCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for release in releases {
        if is_remix(&release.title) || seen.contains(&release.title) {
            continue;
        }
        let release_year = parse_release_year(release.date.as_deref());
        seen.insert(release.title.clone());
        candidates.push(SongCandidate {
            title: release.title,
            release_year,
        });
    }

    candidates
}

/// Look up songs for `artist`, surfacing service failures.
pub async fn try_lookup_songs<S>(source: &S, artist: &str) -> Result<Vec<SongCandidate>>
where
    S: ReleaseSource + ?Sized,
{
    let releases = source.search_releases(artist).await?;
    let candidates = collect_candidates(releases);
    tracing::info!(artist = %artist, songs = candidates.len(), "Song lookup finished");
    Ok(candidates)
}

/// Look up songs for `artist`; any failure is logged and yields no songs.
pub async fn lookup_songs<S>(source: &S, artist: &str) -> Vec<SongCandidate>
where
    S: ReleaseSource + ?Sized,
{
    try_lookup_songs(source, artist).await.unwrap_or_else(|e| {
        tracing::warn!(artist = %artist, "Song lookup failed: {e}");
        Vec::new()
    })
}
