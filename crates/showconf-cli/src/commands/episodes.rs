use std::path::PathBuf;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use showconf_core::{build_episode_list, fetch_episode_listing};
use showconf_tmdb::TmdbClient;

use super::write_document;

pub async fn run_episodes(
    api_key: String,
    tv_id: String,
    output: Option<PathBuf>,
    pretty_print: bool,
) -> Result<()> {
    tracing::debug!(%tv_id, "episodes command started");

    let client = TmdbClient::new(api_key);
    let seasons = fetch_episode_listing(&client, &tv_id)
        .await
        .map_err(|e| eyre!("{:#}", e))?;

    let listing = build_episode_list(&seasons);

    write_document(&listing, output.as_deref(), pretty_print).await
}
