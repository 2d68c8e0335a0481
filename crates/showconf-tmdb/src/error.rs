use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("request to TMDB failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB rejected the API key (HTTP 401)")]
    Unauthorized,

    #[error("TMDB has no {resource} (HTTP 404)")]
    NotFound { resource: String },

    #[error("TMDB returned HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
