use std::path::PathBuf;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use showconf_core::{build_show_config, fetch_show, flatten_languages};
use showconf_models::PreviousConfig;
use showconf_tmdb::TmdbClient;

use super::write_document;

pub async fn run_create(
    api_key: String,
    tv_id: String,
    languages: Vec<String>,
    rate_limit: usize,
    existing_config: PathBuf,
    output: Option<PathBuf>,
    pretty_print: bool,
) -> Result<()> {
    let languages = flatten_languages(&languages);
    if languages.is_empty() {
        return Err(eyre!("at least one language is required"));
    }
    tracing::debug!(%tv_id, ?languages, rate_limit, "create command started");

    // The previous config is read before any network activity so a bad path
    // fails fast.
    let raw = tokio::fs::read_to_string(&existing_config)
        .await
        .wrap_err_with(|| {
            format!(
                "failed to read previous config {}",
                existing_config.display()
            )
        })?;
    let previous: PreviousConfig = serde_json::from_str(&raw).wrap_err_with(|| {
        format!(
            "failed to parse previous config {}",
            existing_config.display()
        )
    })?;

    let client = TmdbClient::new(api_key);
    let fetched = fetch_show(&client, &tv_id, &languages, rate_limit)
        .await
        .map_err(|e| eyre!("{:#}", e))?;

    let config = build_show_config(&fetched, &languages, &previous)?;

    write_document(&config, output.as_deref(), pretty_print).await
}
