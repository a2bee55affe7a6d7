//! `lyricount` - lyric word counts and per-artist statistics.
//!
//! Looks up single releases for each artist on MusicBrainz, fetches lyrics
//! from lyrics.ovh, counts words and summarizes the counts per artist.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod lyrics;
pub mod musicbrainz;
pub mod services;
pub mod types;
pub mod ui;
