//! Song aggregation services.
//!
//! The pipeline is split into small stages that only talk to the outside
//! world through [`ReleaseSource`] and [`LyricsSource`], so each stage can be
//! driven by the real HTTP clients or by in-memory fakes.

pub mod aggregate;
pub mod lookup;
pub mod lyrics;
pub mod stats;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Release;

pub use aggregate::{Aggregator, RunOutcome, RunReport};
pub use lookup::lookup_songs;
pub use lyrics::fetch_lyrics;
pub use stats::summarize;

/// Source of release metadata for an artist.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Single releases credited to `artist`, in the service's response order.
    async fn search_releases(&self, artist: &str) -> Result<Vec<Release>>;
}

/// Source of raw, uncleaned lyrics.
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Lyrics for an exact artist/title pair; `Ok(None)` when the service has none.
    async fn fetch_raw(&self, artist: &str, title: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<T: ReleaseSource + ?Sized> ReleaseSource for Arc<T> {
    async fn search_releases(&self, artist: &str) -> Result<Vec<Release>> {
        (**self).search_releases(artist).await
    }
}

#[async_trait]
impl<T: LyricsSource + ?Sized> LyricsSource for Arc<T> {
    async fn fetch_raw(&self, artist: &str, title: &str) -> Result<Option<String>> {
        (**self).fetch_raw(artist, title).await
    }
}

/// Aggregator over shared, type-erased sources.
pub type SharedAggregator = Aggregator<Arc<dyn ReleaseSource>, Arc<dyn LyricsSource>>;
