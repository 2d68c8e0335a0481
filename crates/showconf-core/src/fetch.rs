use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use futures::future::join_all;
use showconf_tmdb::{SeasonDetails, TvShowDetails};
use tokio::sync::Semaphore;
use tracing::info;

use crate::source::ShowSource;

/// Everything fetched for one run of the config builder: one show-details
/// response per requested language, and one season-details response per
/// (season, language) pair, grouped by season.
///
/// Inner vectors follow the requested language order; the outer season
/// vector is ascending by season number.
#[derive(Debug)]
pub struct FetchedShow {
    pub show_per_language: Vec<TvShowDetails>,
    pub seasons: Vec<Vec<SeasonDetails>>,
}

/// Split comma-grouped language arguments into individual codes, e.g.
/// `["en,fr", "de"]` becomes `["en", "fr", "de"]`.
pub fn flatten_languages(groups: &[String]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|group| group.split(','))
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Season numbers worth fetching: specials (season 0) excluded, ascending.
pub fn canonical_seasons(show: &TvShowDetails) -> Vec<u32> {
    let mut seasons: Vec<u32> = show
        .seasons
        .iter()
        .map(|season| season.season_number)
        .filter(|&season_number| season_number >= 1)
        .collect();
    seasons.sort_unstable();
    seasons
}

/// Fetch show details once per requested language, then season details for
/// every (season, language) pair, with at most `rate_limit` requests in
/// flight at any point across the whole run.
///
/// `join_all` yields results in submission order, so the per-language and
/// per-season alignment of [`FetchedShow`] holds regardless of completion
/// order. Any single failure aborts the whole fetch.
pub async fn fetch_show(
    source: &dyn ShowSource,
    tv_id: &str,
    languages: &[String],
    rate_limit: usize,
) -> Result<FetchedShow> {
    ensure!(!languages.is_empty(), "at least one language is required");
    ensure!(rate_limit >= 1, "rate limit must be at least 1");

    let limiter = Arc::new(Semaphore::new(rate_limit));

    let mut show_futures = Vec::with_capacity(languages.len());
    for language in languages {
        let limiter = Arc::clone(&limiter);
        show_futures.push(async move {
            let _permit = limiter.acquire().await?;
            source
                .show_details(tv_id, Some(language.as_str()))
                .await
                .with_context(|| format!("failed to fetch show {} in language {}", tv_id, language))
        });
    }
    let show_per_language = join_all(show_futures)
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let season_numbers = canonical_seasons(&show_per_language[0]);
    info!(
        tv_id,
        seasons = season_numbers.len(),
        languages = languages.len(),
        "fetching season details"
    );

    let mut season_futures = Vec::with_capacity(season_numbers.len() * languages.len());
    for &season_number in &season_numbers {
        for language in languages {
            let limiter = Arc::clone(&limiter);
            season_futures.push(async move {
                let _permit = limiter.acquire().await?;
                source
                    .season_details(tv_id, season_number, Some(language.as_str()))
                    .await
                    .with_context(|| {
                        format!(
                            "failed to fetch season {} of show {} in language {}",
                            season_number, tv_id, language
                        )
                    })
            });
        }
    }
    let mut season_results = join_all(season_futures)
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    let seasons = season_numbers
        .iter()
        .map(|_| season_results.by_ref().take(languages.len()).collect())
        .collect();

    Ok(FetchedShow {
        show_per_language,
        seasons,
    })
}

/// Fetch every canonical season of a show in the API's default language.
/// Season fetches are issued all at once, one per season, with no cap.
pub async fn fetch_episode_listing(
    source: &dyn ShowSource,
    tv_id: &str,
) -> Result<Vec<SeasonDetails>> {
    let show = source
        .show_details(tv_id, None)
        .await
        .with_context(|| format!("failed to fetch show {}", tv_id))?;

    let season_numbers = canonical_seasons(&show);
    info!(tv_id, seasons = season_numbers.len(), "fetching season details");

    let season_futures = season_numbers.iter().map(|&season_number| async move {
        source
            .season_details(tv_id, season_number, None)
            .await
            .with_context(|| format!("failed to fetch season {} of show {}", season_number, tv_id))
    });

    join_all(season_futures).await.into_iter().collect()
}
