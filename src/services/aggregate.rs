//! Aggregation pipeline: artists to word-counted song records.
//!
//! A run starts from an empty [`SongCollection`] and processes artists in
//! input order. For each artist the songs found by the lookup are appended,
//! lyrics are fetched for those new songs only, songs without lyrics are
//! discarded and word counts are recomputed. Lyrics for a given
//! (artist, title) pair are requested at most once per run, even when the
//! same artist appears twice in the input.

use std::collections::HashMap;
use std::fmt;

use crate::lyrics::{word_count, CleanedLyrics};
use crate::services::lookup::try_lookup_songs;
use crate::services::lyrics::try_fetch_lyrics;
use crate::services::{LyricsSource, ReleaseSource};
use crate::types::{SongCollection, SongRecord};

/// Counters describing what happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Artists looked up.
    pub artists: usize,
    /// Lookups that failed and contributed no songs.
    pub lookup_failures: usize,
    /// Songs returned by the lookups.
    pub candidates: usize,
    /// Lyrics requests sent.
    pub lyrics_requests: usize,
    /// Lyrics requests that failed.
    pub lyrics_failures: usize,
    /// Songs dropped because no lyrics were found or the fetch failed.
    pub songs_dropped: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} artist(s), {} song(s) found, {} dropped without lyrics",
            self.artists, self.candidates, self.songs_dropped
        )?;
        if self.lookup_failures + self.lyrics_failures > 0 {
            write!(
                f,
                " ({} lookup and {} lyrics request(s) failed)",
                self.lookup_failures, self.lyrics_failures
            )?;
        }
        Ok(())
    }
}

/// Result of a full aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Songs with lyrics, in insertion order.
    pub songs: SongCollection,
    /// What the run did.
    pub report: RunReport,
}

/// Drives song lookup and lyrics retrieval across a list of artists.
#[derive(Debug, Clone)]
pub struct Aggregator<R, L> {
    releases: R,
    lyrics: L,
}

/// Lyrics already resolved in this run, keyed by (artist, title).
type LyricsMemo = HashMap<(String, String), CleanedLyrics>;

impl<R, L> Aggregator<R, L>
where
    R: ReleaseSource,
    L: LyricsSource,
{
    /// Create an aggregator over the given sources.
    pub const fn new(releases: R, lyrics: L) -> Self {
        Self { releases, lyrics }
    }

    /// Build a fresh collection for `artists`.
    pub async fn aggregate<S: AsRef<str> + Sync>(&self, artists: &[S]) -> SongCollection {
        self.run(artists).await.songs
    }

    /// Build a fresh collection for `artists`, reporting what happened.
    pub async fn run<S: AsRef<str> + Sync>(&self, artists: &[S]) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        let mut memo = LyricsMemo::new();

        for artist in artists {
            self.append_artist(&mut outcome.songs, artist.as_ref(), &mut memo, &mut outcome.report)
                .await;
        }

        tracing::info!(songs = outcome.songs.len(), "Aggregation finished: {}", outcome.report);
        outcome
    }

    /// Add one artist's songs to an existing, caller-owned collection.
    ///
    /// Songs already in the collection are not fetched again.
    pub async fn extend_with_artist(&self, songs: &mut SongCollection, artist: &str) -> RunReport {
        let mut memo: LyricsMemo = songs
            .iter()
            .map(|r| {
                let cleaned = CleanedLyrics {
                    text: r.lyrics.clone(),
                    word_count: r.word_count,
                };
                ((r.artist.clone(), r.title.clone()), cleaned)
            })
            .collect();
        let mut report = RunReport::default();
        self.append_artist(songs, artist, &mut memo, &mut report).await;
        report
    }

    async fn append_artist(
        &self,
        songs: &mut SongCollection,
        artist: &str,
        memo: &mut LyricsMemo,
        report: &mut RunReport,
    ) {
        let artist = artist.trim();
        if artist.is_empty() {
            return;
        }
        report.artists += 1;

        let candidates = match try_lookup_songs(&self.releases, artist).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(artist = %artist, "Song lookup failed: {e}");
                report.lookup_failures += 1;
                Vec::new()
            }
        };
        report.candidates += candidates.len();

        for candidate in candidates {
            let lyrics = self.lyrics_for(artist, &candidate.title, memo, report).await;

            if lyrics.text.is_empty() {
                report.songs_dropped += 1;
                continue;
            }

            songs.push(SongRecord {
                artist: artist.to_string(),
                title: candidate.title,
                release_year: candidate.release_year,
                lyrics: lyrics.text,
                word_count: lyrics.word_count,
            });
        }

        finalize(songs);
    }

    async fn lyrics_for(
        &self,
        artist: &str,
        title: &str,
        memo: &mut LyricsMemo,
        report: &mut RunReport,
    ) -> CleanedLyrics {
        let key = (artist.to_string(), title.to_string());
        if let Some(known) = memo.get(&key) {
            return known.clone();
        }
        let fetched = self.fetch_for(artist, title, report).await;
        memo.insert(key, fetched.clone());
        fetched
    }

    async fn fetch_for(&self, artist: &str, title: &str, report: &mut RunReport) -> CleanedLyrics {
        report.lyrics_requests += 1;
        match try_fetch_lyrics(&self.lyrics, artist, title).await {
            Ok(cleaned) => cleaned,
            Err(e) => {
                tracing::warn!(artist = %artist, title = %title, "Lyrics fetch failed: {e}");
                report.lyrics_failures += 1;
                CleanedLyrics::default()
            }
        }
    }
}

/// Drop records without lyrics and recompute every word count.
pub fn finalize(songs: &mut SongCollection) {
    songs.retain(|r| !r.lyrics.is_empty());
    for record in songs.records_mut() {
        record.word_count = word_count(&record.lyrics);
    }
}
