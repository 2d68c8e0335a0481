pub mod create;
pub mod episodes;

use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;

/// Serialize a document and either write it to `output` (overwriting any
/// existing file) or print it to stdout with a trailing newline.
pub(crate) async fn write_document<T: Serialize>(
    document: &T,
    output: Option<&Path>,
    pretty_print: bool,
) -> Result<()> {
    let rendered = if pretty_print {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .wrap_err("failed to serialize output document")?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote output");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
