//! Lyrics retrieval and text cleaning.
//!
//! Fetches plain lyrics from lyrics.ovh and reduces them to a normalized,
//! countable form: punctuation stripped, lowercased, single-space joined.

/// API client for lyrics.ovh
pub mod api;
/// Punctuation stripping and word counting
pub mod clean;

pub use api::LyricsOvhClient;
pub use clean::{clean_lyrics, word_count, CleanedLyrics};
