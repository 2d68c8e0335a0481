use serde::Deserialize;

/// Subset of the TMDB v3 `/tv/{id}` payload the tools consume.
#[derive(Debug, Clone, Deserialize)]
pub struct TvShowDetails {
    pub id: u64,
    /// Display name in the requested language.
    pub name: String,
    pub original_name: String,
    pub original_language: String,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub episode_count: Option<u32>,
}

/// Subset of the TMDB v3 `/tv/{id}/season/{season_number}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonDetails {
    pub season_number: u32,
    #[serde(default)]
    pub episodes: Vec<TvEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvEpisode {
    pub episode_number: u32,
    pub name: String,
    pub overview: Option<String>,
}
