use anyhow::Result;
use async_trait::async_trait;
use showconf_tmdb::{SeasonDetails, TmdbClient, TvShowDetails};

/// Where show and season metadata comes from. Implemented by the TMDB
/// client; tests substitute a deterministic fixture source.
#[async_trait]
pub trait ShowSource: Send + Sync {
    /// Show-level metadata. `language` of `None` means the API default.
    async fn show_details(&self, tv_id: &str, language: Option<&str>) -> Result<TvShowDetails>;

    /// Episode-level metadata for one season.
    async fn season_details(
        &self,
        tv_id: &str,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<SeasonDetails>;
}

#[async_trait]
impl ShowSource for TmdbClient {
    async fn show_details(&self, tv_id: &str, language: Option<&str>) -> Result<TvShowDetails> {
        Ok(self.tv_details(tv_id, language).await?)
    }

    async fn season_details(
        &self,
        tv_id: &str,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<SeasonDetails> {
        Ok(self.tv_season_details(tv_id, season_number, language).await?)
    }
}
