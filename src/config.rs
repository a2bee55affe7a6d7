//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::http;
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// MusicBrainz web service root (no trailing slash)
    pub musicbrainz_url: String,
    /// lyrics.ovh API root (no trailing slash)
    pub lyrics_url: String,
    /// Timeout applied to every external request
    pub request_timeout: Duration,
    /// Page size for the release search
    pub search_limit: u32,
    /// Where the terminal UI writes its log, if anywhere
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// User-Agent sent to external services.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.app_name, self.app_version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            musicbrainz_url: http::DEFAULT_MUSICBRAINZ_URL.to_string(),
            lyrics_url: http::DEFAULT_LYRICS_URL.to_string(),
            request_timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            search_limit: http::DEFAULT_SEARCH_LIMIT,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = env::var("MUSICBRAINZ_URL") {
            config.musicbrainz_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(url) = env::var("LYRICS_URL") {
            config.lyrics_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(secs) = env::var("HTTP_TIMEOUT_SECS") {
            let secs = parse_timeout(&secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(limit) = env::var("MUSICBRAINZ_LIMIT") {
            config.search_limit = parse_search_limit(&limit)?;
        }

        config.log_file = env::var("LYRICOUNT_LOG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(Error::config(
            format!("HTTP_TIMEOUT_SECS must be a positive integer, got {raw:?}"),
            "Unset it to use the default of 20 seconds",
        )),
    }
}

fn parse_search_limit(raw: &str) -> Result<u32> {
    let limit = raw.trim().parse::<u32>().map_err(|_| {
        Error::config(
            format!("MUSICBRAINZ_LIMIT must be an integer, got {raw:?}"),
            "Use a value between 1 and 100",
        )
    })?;
    Ok(limit.clamp(1, http::MAX_SEARCH_LIMIT))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_point_at_public_services() {
        let config = Config::default();
        assert_eq!(config.musicbrainz_url, "https://musicbrainz.org/ws/2");
        assert_eq!(config.lyrics_url, "https://api.lyrics.ovh/v1");
        assert_eq!(config.search_limit, 25);
        assert!(config.user_agent().starts_with("lyricount/"));
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout(" 5 ").unwrap(), 5);
        assert!(matches!(parse_timeout("0"), Err(Error::Config { .. })));
        assert!(matches!(parse_timeout("soon"), Err(Error::Config { .. })));
    }

    #[test]
    fn search_limit_is_clamped() {
        assert_eq!(parse_search_limit("0").unwrap(), 1);
        assert_eq!(parse_search_limit("250").unwrap(), 100);
        assert_eq!(parse_search_limit("40").unwrap(), 40);
        assert!(parse_search_limit("-3").is_err());
    }
}
