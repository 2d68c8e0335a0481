use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TmdbError;
use crate::types::{SeasonDetails, TvShowDetails};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Thin client for the two TMDB v3 endpoints the tools consume. Auth is
/// the `api_key` query parameter; no retry, no backoff, every failure is
/// surfaced to the caller.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, TMDB_API_BASE)
    }

    /// Point the client at a different server. Used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch `/tv/{id}`. `language` of `None` means the API default.
    pub async fn tv_details(
        &self,
        tv_id: &str,
        language: Option<&str>,
    ) -> Result<TvShowDetails, TmdbError> {
        debug!(tv_id, ?language, "fetching show details");
        let url = format!("{}/tv/{}", self.base_url, tv_id);
        self.get(&url, language, || format!("TV show {}", tv_id))
            .await
    }

    /// Fetch `/tv/{id}/season/{season_number}`.
    pub async fn tv_season_details(
        &self,
        tv_id: &str,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<SeasonDetails, TmdbError> {
        debug!(tv_id, season_number, ?language, "fetching season details");
        let url = format!("{}/tv/{}/season/{}", self.base_url, tv_id, season_number);
        self.get(&url, language, || {
            format!("season {} of TV show {}", season_number, tv_id)
        })
        .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        language: Option<&str>,
        resource: impl FnOnce() -> String,
    ) -> Result<T, TmdbError> {
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        if let Some(language) = language {
            query.push(("language", language));
        }

        let response = self.client.get(url).query(&query).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound {
                resource: resource(),
            }),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(TmdbError::Api { status, body })
            }
            _ => Ok(response.json().await?),
        }
    }
}
