//! Lyrics fetch and clean for a single artist/title pair.

use crate::error::Result;
use crate::lyrics::{clean_lyrics, CleanedLyrics};
use crate::services::LyricsSource;

/// Fetch and clean lyrics, surfacing service failures.
///
/// Absent lyrics are `Ok` with empty text.
pub async fn try_fetch_lyrics<S>(source: &S, artist: &str, title: &str) -> Result<CleanedLyrics>
where
    S: LyricsSource + ?Sized,
{
    let Some(raw) = source.fetch_raw(artist, title).await? else {
        tracing::debug!(artist = %artist, title = %title, "No lyrics found");
        return Ok(CleanedLyrics::default());
    };
    Ok(clean_lyrics(&raw))
}

/// Cleaned lyrics for `artist` / `title`, or an empty string on any failure.
pub async fn fetch_lyrics<S>(source: &S, artist: &str, title: &str) -> String
where
    S: LyricsSource + ?Sized,
{
    match try_fetch_lyrics(source, artist, title).await {
        Ok(cleaned) => cleaned.text,
        Err(e) => {
            tracing::warn!(artist = %artist, title = %title, "Lyrics fetch failed: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;

    struct Canned(Option<&'static str>);

    #[async_trait]
    impl LyricsSource for Canned {
        async fn fetch_raw(&self, _artist: &str, _title: &str) -> Result<Option<String>> {
            Ok(self.0.map(String::from))
        }
    }

    struct Failing;

    #[async_trait]
    impl LyricsSource for Failing {
        async fn fetch_raw(&self, _artist: &str, _title: &str) -> Result<Option<String>> {
            Err(Error::api_status("lyrics.ovh", "Request returned 500", 500))
        }
    }

    #[tokio::test]
    async fn lyrics_are_cleaned() {
        let source = Canned(Some("Woo-hoo!\n\nWoo-HOO"));
        assert_eq!(fetch_lyrics(&source, "Blur", "Song 2").await, "woohoo woohoo");
    }

    #[tokio::test]
    async fn absent_lyrics_are_empty() {
        assert_eq!(fetch_lyrics(&Canned(None), "Blur", "Song 2").await, "");
        let cleaned = try_fetch_lyrics(&Canned(None), "Blur", "Song 2").await.unwrap();
        assert_eq!(cleaned.word_count, 0);
    }

    #[tokio::test]
    async fn failures_are_empty_not_errors() {
        assert_eq!(fetch_lyrics(&Failing, "Blur", "Song 2").await, "");
        let err = try_fetch_lyrics(&Failing, "Blur", "Song 2").await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, .. }));
    }
}
