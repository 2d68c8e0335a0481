//! Deterministic fixture source for pipeline tests. No network involved.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::json;
use showconf_models::PreviousConfig;
use showconf_tmdb::{SeasonDetails, SeasonSummary, TvEpisode, TvShowDetails};

use crate::source::ShowSource;

pub struct FakeSource {
    pub season_numbers: Vec<u32>,
    pub episodes_per_season: u32,
    /// Season whose fetch fails outright.
    pub fail_season: Option<u32>,
    /// Language whose episode numbers are shifted by one.
    pub misaligned_language: Option<String>,
    /// Language whose episode list is one entry short.
    pub truncated_language: Option<String>,
    /// Report empty-string overviews instead of text where one exists.
    pub empty_overviews: bool,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requests: AtomicUsize,
}

impl FakeSource {
    pub fn new(season_numbers: Vec<u32>, episodes_per_season: u32) -> Self {
        Self {
            season_numbers,
            episodes_per_season,
            fail_season: None,
            misaligned_language: None,
            truncated_language: None,
            empty_overviews: false,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn show_fixture(&self, language: Option<&str>) -> TvShowDetails {
        TvShowDetails {
            id: 42,
            name: format!("Fixture Show [{}]", language.unwrap_or("default")),
            original_name: "Fixture Show".to_string(),
            original_language: "en".to_string(),
            seasons: self
                .season_numbers
                .iter()
                .map(|&season_number| SeasonSummary {
                    season_number,
                    episode_count: Some(self.episodes_per_season),
                })
                .collect(),
        }
    }

    fn season_fixture(&self, season_number: u32, language: Option<&str>) -> SeasonDetails {
        let language = language.unwrap_or("default");
        let shift = if self.misaligned_language.as_deref() == Some(language) {
            1
        } else {
            0
        };
        let count = if self.truncated_language.as_deref() == Some(language) {
            self.episodes_per_season.saturating_sub(1)
        } else {
            self.episodes_per_season
        };

        let episodes = (1..=count)
            .map(|episode_number| {
                // Even-numbered episodes have no overview at all.
                let overview = if episode_number % 2 == 0 {
                    None
                } else if self.empty_overviews {
                    Some(String::new())
                } else {
                    Some(format!(
                        "Overview S{}E{} [{}]",
                        season_number, episode_number, language
                    ))
                };
                TvEpisode {
                    episode_number: episode_number + shift,
                    name: format!("S{}E{} [{}]", season_number, episode_number, language),
                    overview,
                }
            })
            .collect();

        SeasonDetails {
            season_number,
            episodes,
        }
    }

    /// Track one in-flight request so tests can observe the effective
    /// concurrency. The sleep keeps overlapping requests overlapping long
    /// enough to be counted.
    async fn track_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ShowSource for FakeSource {
    async fn show_details(&self, _tv_id: &str, language: Option<&str>) -> Result<TvShowDetails> {
        self.track_request().await;
        Ok(self.show_fixture(language))
    }

    async fn season_details(
        &self,
        _tv_id: &str,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<SeasonDetails> {
        self.track_request().await;
        if self.fail_season == Some(season_number) {
            bail!("fixture failure");
        }
        Ok(self.season_fixture(season_number, language))
    }
}

/// A previous config holding one timing entry per given (season, episode).
pub fn previous_config_for(episodes: &[(u32, u32)]) -> PreviousConfig {
    let episodes: Vec<_> = episodes
        .iter()
        .map(|&(season_number, episode_number)| {
            json!({
                "season_number": season_number,
                "episode_number": episode_number,
                "timings": {"introStart": season_number * 100 + episode_number},
            })
        })
        .collect();

    serde_json::from_value(json!({
        "commonTimings": {"introLength": 90},
        "episodes": episodes,
    }))
    .expect("fixture previous config must parse")
}
