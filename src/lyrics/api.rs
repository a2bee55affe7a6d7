use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::LyricsSource;

const SERVICE: &str = "lyrics.ovh";

/// Body of `GET /v1/{artist}/{title}`
#[derive(Debug, Deserialize)]
struct LyricsOvhResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// Client for the lyrics.ovh API
#[derive(Clone)]
pub struct LyricsOvhClient {
    base_url: String,
    client: Client,
}

impl LyricsOvhClient {
    /// Create a new lyrics client from config
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.lyrics_url.clone(),
            client,
        })
    }

    /// Build `{base}/{artist}/{title}` with both segments percent-encoded
    fn lyrics_url(&self, artist: &str, title: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::config(
                format!("Invalid lyrics URL {:?}: {e}", self.base_url),
                "Set LYRICS_URL to an absolute http(s) URL",
            ))?;
        url.path_segments_mut()
            .map_err(|()| Error::config(
                format!("Lyrics URL {:?} cannot take a path", self.base_url),
                "Set LYRICS_URL to an absolute http(s) URL",
            ))?
            .pop_if_empty()
            .push(artist)
            .push(title);
        Ok(url)
    }

    /// Fetch the raw lyrics text; `None` when the service has no lyrics
    pub async fn fetch(&self, artist: &str, title: &str) -> Result<Option<String>> {
        let url = self.lyrics_url(artist, title)?;

        let resp = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Lyrics request for {artist:?} / {title:?} failed: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::api_status(
                SERVICE,
                format!("Lyrics request for {artist:?} / {title:?} returned {status}"),
                status.as_u16(),
            ));
        }

        let body: LyricsOvhResponse = resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from lyrics service: {e}")))?;

        Ok(body.lyrics)
    }
}

#[async_trait]
impl LyricsSource for LyricsOvhClient {
    async fn fetch_raw(&self, artist: &str, title: &str) -> Result<Option<String>> {
        self.fetch(artist, title).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn client(base: &str) -> LyricsOvhClient {
        let mut config = Config::default();
        config.lyrics_url = base.to_string();
        LyricsOvhClient::new(&config).unwrap()
    }

    #[test]
    fn url_segments_are_encoded() {
        let url = client("https://api.lyrics.ovh/v1")
            .lyrics_url("AC/DC", "Rock 'n' Roll Ain't Noise Pollution?")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.lyrics.ovh/v1/AC%2FDC/Rock%20'n'%20Roll%20Ain't%20Noise%20Pollution%3F"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let url = client("https://api.lyrics.ovh/v1/").lyrics_url("Blur", "Song 2").unwrap();
        assert_eq!(url.as_str(), "https://api.lyrics.ovh/v1/Blur/Song%202");
    }

    #[test]
    fn relative_base_is_a_config_error() {
        let err = client("api.lyrics.ovh").lyrics_url("Blur", "Song 2").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_lyrics_field_is_none() {
        let body: LyricsOvhResponse = serde_json::from_str(r#"{"error":"No lyrics found"}"#).unwrap();
        assert!(body.lyrics.is_none());
    }
}
