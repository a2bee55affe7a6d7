//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// External service answered with a non-success status
    #[error("{service} error: {message}")]
    Api {
        /// Name of the service that failed (e.g. "MusicBrainz").
        service: &'static str,
        /// Human-readable error description.
        message: String,
        /// HTTP status code returned by the service.
        status: u16,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Response body could not be decoded or lacked expected fields
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an external service error with HTTP status
    pub fn api_status(service: &'static str, message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            400 => Some("The query was rejected - check the artist name for unusual characters"),
            404 => Some("The requested resource was not found"),
            429 | 503 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Service-side error - try again later"),
            _ => None,
        };
        Self::Api {
            service,
            message: message.into(),
            status,
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn api_status_provides_hints() {
        let err = Error::api_status("MusicBrainz", "Service Unavailable", 503);
        match err {
            Error::Api { hint: Some(h), status, .. } => {
                assert_eq!(status, 503);
                assert!(h.contains("Rate limited"));
            }
            _ => panic!("Expected Api error with hint"),
        }
    }

    #[test]
    fn api_status_without_known_hint() {
        let err = Error::api_status("lyrics.ovh", "Teapot", 418);
        assert!(matches!(err, Error::Api { status: 418, hint: None, .. }));
    }

    #[test]
    fn display_names_the_service() {
        let err = Error::api_status("lyrics.ovh", "Request returned 500", 500);
        assert_eq!(err.to_string(), "lyrics.ovh error: Request returned 500");
    }
}
