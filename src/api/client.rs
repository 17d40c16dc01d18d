//! HTTP implementation of [`BibleApi`] on top of `reqwest`.
//!
//! Each method maps to exactly one GET against the configured base URL.
//! There is no retry, timeout or caching layer: whatever the transport or the
//! backend reports is handed straight back to the caller.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::service::{BibleApi, DEFAULT_SEARCH_LIMIT};
use super::types::{Book, Chapter, Health, Stats, Suggestions, Verse};

/// Bible API client bound to one base URL (e.g. `http://localhost:8001/api/v1`).
#[derive(Debug, Clone)]
pub struct BibleClient {
    base_url: Url,
    client: reqwest::Client,
}

impl BibleClient {
    /// Creates a client for `base_url`. The base may carry a path prefix and
    /// an optional trailing slash.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid API base URL {base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "API base URL {base_url:?} cannot carry a path"
            )));
        }

        Ok(Self {
            base_url: parsed,
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    /// `.` and `..` are rejected: URL normalization would drop them and hit another route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::Config(format!(
                "path segment {bad:?} cannot be sent as a name"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("cannot extend base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        debug!("GET {} query={:?}", url, query);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Bible API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Bible API error: {} - {}", status.as_u16(), body);
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl BibleApi for BibleClient {
    async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_json(&["books"], &[]).await
    }

    async fn get_book(&self, book_id: u32) -> Result<Book, ApiError> {
        let id = book_id.to_string();
        self.get_json(&["books", &id], &[]).await
    }

    async fn get_book_chapters(&self, book_id: u32) -> Result<Vec<Chapter>, ApiError> {
        let id = book_id.to_string();
        self.get_json(&["books", &id, "chapters"], &[]).await
    }

    async fn get_chapter(&self, chapter_id: u32) -> Result<Chapter, ApiError> {
        let id = chapter_id.to_string();
        self.get_json(&["chapters", &id], &[]).await
    }

    async fn get_chapter_verses(&self, chapter_id: u32) -> Result<Vec<Verse>, ApiError> {
        let id = chapter_id.to_string();
        self.get_json(&["chapters", &id, "verses"], &[]).await
    }

    async fn get_verse(&self, verse_id: u32) -> Result<Verse, ApiError> {
        let id = verse_id.to_string();
        self.get_json(&["verses", &id], &[]).await
    }

    async fn get_random_verse(&self) -> Result<Verse, ApiError> {
        self.get_json(&["verses", "random"], &[]).await
    }

    async fn get_verse_by_reference(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Verse, ApiError> {
        let chapter = chapter.to_string();
        let verse = verse.to_string();
        self.get_json(&["verse", book, &chapter, &verse], &[]).await
    }

    async fn search_verses(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Verse>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        self.get_json(
            &["search"],
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn search_suggestions(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Suggestions, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        self.get_json(
            &["search", "suggest"],
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.get_json(&["stats"], &[]).await
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.get_json(&["health"], &[]).await
    }
}
