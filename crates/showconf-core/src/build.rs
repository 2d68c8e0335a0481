use showconf_models::{
    EpisodeConfig, EpisodeEntry, EpisodeList, LocalizedEpisode, LocalizedName, PreviousConfig,
    ShowConfig, ShowName,
};
use showconf_tmdb::SeasonDetails;
use thiserror::Error;
use tracing::debug;

use crate::fetch::FetchedShow;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no show metadata was fetched")]
    NoShowData,

    #[error("previous config has no timings for season {season_number} episode {episode_number}")]
    MissingTimings {
        season_number: u32,
        episode_number: u32,
    },

    #[error(
        "season {season_number} lists {expected} episodes in {first_language} \
         but {found} in {language}"
    )]
    EpisodeCountMismatch {
        season_number: u32,
        first_language: String,
        expected: usize,
        language: String,
        found: usize,
    },

    #[error(
        "season {season_number} episode ordering differs between {first_language} \
         (episode {expected}) and {language} (episode {found})"
    )]
    EpisodeMisaligned {
        season_number: u32,
        first_language: String,
        expected: u32,
        language: String,
        found: u32,
    },
}

/// Merge fetched metadata with the previous config's timing data into the
/// output document.
///
/// Episodes are matched across languages by position in the per-season
/// episode list; [`validate_alignment`] checks that every language agrees
/// on episode count and numbering before any position is trusted. A missing
/// (season, episode) entry in the previous config is fatal.
pub fn build_show_config(
    fetched: &FetchedShow,
    languages: &[String],
    previous: &PreviousConfig,
) -> Result<ShowConfig, BuildError> {
    let first = fetched
        .show_per_language
        .first()
        .ok_or(BuildError::NoShowData)?;

    let name = ShowName {
        name: first.original_name.clone(),
        per_language: fetched
            .show_per_language
            .iter()
            .zip(languages)
            .map(|(show, language)| LocalizedName {
                name: show.name.clone(),
                language: language.clone(),
            })
            .collect(),
    };

    let default_language = languages
        .iter()
        .any(|code| code == &first.original_language)
        .then(|| first.original_language.clone());

    let mut episodes = Vec::new();
    for season in &fetched.seasons {
        let reference = validate_alignment(season, languages)?;
        debug!(
            season_number = reference.season_number,
            episodes = reference.episodes.len(),
            "merging season"
        );

        for (index, episode) in reference.episodes.iter().enumerate() {
            let per_language = season
                .iter()
                .zip(languages)
                .map(|(details, language)| {
                    let localized = &details.episodes[index];
                    LocalizedEpisode {
                        language: language.clone(),
                        name: localized.name.clone(),
                        overview: localized
                            .overview
                            .as_deref()
                            .filter(|overview| !overview.is_empty())
                            .map(str::to_string),
                    }
                })
                .collect();

            let timings = previous
                .timings_for(reference.season_number, episode.episode_number)
                .ok_or(BuildError::MissingTimings {
                    season_number: reference.season_number,
                    episode_number: episode.episode_number,
                })?
                .clone();

            episodes.push(EpisodeConfig {
                season_number: reference.season_number,
                episode_number: episode.episode_number,
                per_language,
                timings,
            });
        }
    }

    Ok(ShowConfig {
        name,
        default_language,
        episodes,
        common_timings: previous.common_timings.clone(),
    })
}

/// Check that every language's response for one season lists the same
/// episodes in the same order as the first language's, and return the
/// first language's response as the reference.
fn validate_alignment<'a>(
    season: &'a [SeasonDetails],
    languages: &[String],
) -> Result<&'a SeasonDetails, BuildError> {
    let mut pairs = season.iter().zip(languages);
    let (reference, first_language) = pairs.next().ok_or(BuildError::NoShowData)?;

    for (details, language) in pairs {
        if details.episodes.len() != reference.episodes.len() {
            return Err(BuildError::EpisodeCountMismatch {
                season_number: reference.season_number,
                first_language: first_language.clone(),
                expected: reference.episodes.len(),
                language: language.clone(),
                found: details.episodes.len(),
            });
        }
        for (expected, found) in reference.episodes.iter().zip(&details.episodes) {
            if expected.episode_number != found.episode_number {
                return Err(BuildError::EpisodeMisaligned {
                    season_number: reference.season_number,
                    first_language: first_language.clone(),
                    expected: expected.episode_number,
                    language: language.clone(),
                    found: found.episode_number,
                });
            }
        }
    }

    Ok(reference)
}

/// Flatten per-season episode metadata into the lister's output document.
/// Unlike the config builder, a missing overview becomes an empty string
/// rather than an omitted key.
pub fn build_episode_list(seasons: &[SeasonDetails]) -> EpisodeList {
    let entries = seasons
        .iter()
        .flat_map(|season| {
            season.episodes.iter().map(|episode| EpisodeEntry {
                name: episode.name.clone(),
                overview: episode.overview.clone().unwrap_or_default(),
                season: season.season_number,
                episode: episode.episode_number,
            })
        })
        .collect();

    EpisodeList { entries }
}
