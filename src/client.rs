//! Endpoint façade over the Songle HTTP API.

use log::debug;
use serde_json::Value;

use crate::entities::{BeatInfo, ChordInfo, ChorusInfo, MelodyInfo, Revision, Song};
use crate::errors::{Error, Result};
use crate::mapper::{self, keycase, Record};

const BASE_URL: &str = "https://widget.songle.jp/";

/// Client for the Songle music-analysis web API.
///
/// Holds no mutable state after construction; a single instance can serve
/// concurrent callers. Timeouts, pooling and TLS belong to the injected
/// [`reqwest::Client`].
pub struct SongleClient {
    http: reqwest::Client,
    base_url: String,
}

impl SongleClient {
    /// Creates a client talking to the production service.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, BASE_URL)
    }

    /// Creates a client against a different base origin. Useful for tests
    /// and mirrors; `base_url` must end with a slash.
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        SongleClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// Retrieves metadata for the song at `url`.
    pub async fn song_info(&self, url: &str) -> Result<Song> {
        self.fetch("api/v1/song.json", &[("url", url)]).await
    }

    /// Retrieves the beat map, optionally at a specific revision.
    pub async fn beats(&self, url: &str, revision_id: Option<u64>) -> Result<BeatInfo> {
        self.fetch_map("api/v1/song/beat.json", url, revision_id)
            .await
    }

    /// Lists saved versions of the beat map.
    pub async fn beat_revisions(&self, url: &str) -> Result<Vec<Revision>> {
        self.fetch_list("api/v1/song/beat_revisions.json", &[("url", url)])
            .await
    }

    /// Retrieves the chord map, optionally at a specific revision.
    pub async fn chords(&self, url: &str, revision_id: Option<u64>) -> Result<ChordInfo> {
        self.fetch_map("api/v1/song/chord.json", url, revision_id)
            .await
    }

    /// Lists saved versions of the chord map.
    pub async fn chord_revisions(&self, url: &str) -> Result<Vec<Revision>> {
        self.fetch_list("api/v1/song/chord_revisions.json", &[("url", url)])
            .await
    }

    /// Retrieves the melody map, optionally at a specific revision.
    pub async fn melody(&self, url: &str, revision_id: Option<u64>) -> Result<MelodyInfo> {
        self.fetch_map("api/v1/song/melody.json", url, revision_id)
            .await
    }

    /// Lists saved versions of the melody map.
    pub async fn melody_revisions(&self, url: &str) -> Result<Vec<Revision>> {
        self.fetch_list("api/v1/song/melody_revisions.json", &[("url", url)])
            .await
    }

    /// Retrieves chorus and repeat segments, optionally at a specific
    /// revision.
    pub async fn chorus(&self, url: &str, revision_id: Option<u64>) -> Result<ChorusInfo> {
        self.fetch_map("api/v1/song/chorus.json", url, revision_id)
            .await
    }

    /// Lists saved versions of the chorus map.
    pub async fn chorus_revisions(&self, url: &str) -> Result<Vec<Revision>> {
        self.fetch_list("api/v1/song/chorus_revisions.json", &[("url", url)])
            .await
    }

    /// Searches songs by free text.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>> {
        self.fetch_list("api/v1/songs/search.json", &[("q", query)])
            .await
    }

    // Map endpoints share the url + optional revision_id parameter pair.
    async fn fetch_map<T: Record>(
        &self,
        path: &str,
        url: &str,
        revision_id: Option<u64>,
    ) -> Result<T> {
        let revision = revision_id.map(|id| id.to_string());
        let mut params = vec![("url", url)];
        if let Some(revision) = revision.as_deref() {
            params.push(("revision_id", revision));
        }
        self.fetch(path, &params).await
    }

    async fn fetch<T: Record>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let raw = self.get(path, params).await?;
        mapper::materialize(&keycase::normalize_keys(raw))
    }

    async fn fetch_list<T: Record>(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let raw = self.get(path, params).await?;
        mapper::materialize_list(&keycase::normalize_keys(raw))
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let endpoint = format!("{}{}", self.base_url, path);
        debug!("GET {endpoint}");

        let response = self
            .http
            .get(&endpoint)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!("{path} returned {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for SongleClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}
