use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::musicbrainz::types::ReleaseSearchResponse;
use crate::services::ReleaseSource;
use crate::types::Release;

const SERVICE: &str = "MusicBrainz";

/// Client for the MusicBrainz release search
#[derive(Clone)]
pub struct MusicBrainzClient {
    base_url: String,
    limit: u32,
    client: Client,
}

impl MusicBrainzClient {
    /// Create a new MusicBrainz client from config
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.musicbrainz_url.clone(),
            limit: config.search_limit,
            client,
        })
    }

    /// Search query selecting single releases credited to `artist`
    fn search_query(artist: &str) -> String {
        format!("artist:{artist} AND primarytype:Single")
    }

    /// Search for single releases by `artist`, first page only
    pub async fn search(&self, artist: &str) -> Result<Vec<Release>> {
        let url = format!("{}/release/", self.base_url);
        let limit = self.limit.to_string();
        let query = Self::search_query(artist);

        tracing::debug!(artist = %artist, url = %url, "Querying MusicBrainz");

        let resp = self.client
            .get(&url)
            .query(&[("query", query.as_str()), ("fmt", "json"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Release search for {artist:?} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::api_status(
                SERVICE,
                format!("Release search for {artist:?} returned {status}"),
                status.as_u16(),
            ));
        }

        let body: ReleaseSearchResponse = resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from release search: {e}")))?;

        if body.releases.is_none() {
            tracing::info!(artist = %artist, "No releases in MusicBrainz response");
        }

        body.into_releases()
    }
}

#[async_trait]
impl ReleaseSource for MusicBrainzClient {
    async fn search_releases(&self, artist: &str) -> Result<Vec<Release>> {
        self.search(artist).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn query_filters_singles() {
        assert_eq!(
            MusicBrainzClient::search_query("Blur"),
            "artist:Blur AND primarytype:Single"
        );
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = MusicBrainzClient::new(&Config::default()).unwrap();
        assert_eq!(client.base_url, "https://musicbrainz.org/ws/2");
        assert_eq!(client.limit, 25);
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        let mut config = Config::default();
        config.musicbrainz_url = "http://127.0.0.1:9".to_string();
        config.request_timeout = std::time::Duration::from_secs(2);
        let client = MusicBrainzClient::new(&config).unwrap();
        let err = client.search("Blur").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)), "unexpected error: {err}");
    }
}
