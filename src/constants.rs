//! Application constants.
//!
//! Centralizes magic numbers and configuration defaults.

/// Song lookup constants.
pub mod lookup {
    /// Release year assigned when the metadata service reports no usable date.
    pub const DEFAULT_RELEASE_YEAR: i32 = 2000;

    /// Case-insensitive marker for titles excluded from lookup results.
    pub const REMIX_MARKER: &str = "remix";
}

/// External service defaults.
pub mod http {
    /// MusicBrainz web service root.
    pub const DEFAULT_MUSICBRAINZ_URL: &str = "https://musicbrainz.org/ws/2";

    /// lyrics.ovh API root.
    pub const DEFAULT_LYRICS_URL: &str = "https://api.lyrics.ovh/v1";

    /// Per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

    /// Default page size for the release search.
    pub const DEFAULT_SEARCH_LIMIT: u32 = 25;

    /// Largest page size MusicBrainz accepts.
    pub const MAX_SEARCH_LIMIT: u32 = 100;
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 8;
}

/// UI layout constants.
pub mod ui {
    /// Height of the summary table pane, borders included.
    pub const SUMMARY_HEIGHT: u16 = 10;

    /// Percentage of the lower area given to the song table when shown.
    pub const SONG_TABLE_PERCENT: u16 = 50;
}
