//! MusicBrainz integration.
//!
//! Searches MusicBrainz for single releases by artist name. Only the first
//! page of results is requested.

/// API client for MusicBrainz release searches
pub mod api;
/// Wire types for MusicBrainz search responses
pub mod types;

pub use api::MusicBrainzClient;
