use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full configuration document emitted by `showconf create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowConfig {
    pub name: ShowName,
    /// Present only when the show's original language is one of the
    /// requested language codes.
    #[serde(rename = "defaultLanguage", skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    pub episodes: Vec<EpisodeConfig>,
    /// Opaque timing metadata carried over from the previous config.
    #[serde(rename = "commonTimings")]
    pub common_timings: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowName {
    /// The show's original (untranslated) name.
    pub name: String,
    #[serde(rename = "perLanguage")]
    pub per_language: Vec<LocalizedName>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizedName {
    pub name: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeConfig {
    pub season_number: u32,
    pub episode_number: u32,
    /// One entry per requested language, in request order.
    #[serde(rename = "perLanguage")]
    pub per_language: Vec<LocalizedEpisode>,
    /// Opaque timing metadata carried over from the previous config.
    pub timings: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizedEpisode {
    pub language: String,
    pub name: String,
    /// The key is omitted entirely when the source has no overview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}
