//! The `feed` command: fetch-then-cache, parse, assemble, publish.
//!
//! The catalogue is written to a sibling temp file and renamed into place
//! so a failed run can never leave a half-written document at the
//! published path.

use std::path::{Path, PathBuf};

use anyhow::Context;

use hellocomp_core::{AppConfig, Catalogue, CategorySlug};
use hellocomp_feed::{build_catalogue, parse_feed, FeedClient};

pub(crate) async fn run_feed(
    config: &AppConfig,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let client = FeedClient::new(config.http_timeout_secs, &config.user_agent)?;
    client.ensure_local_copy(&config.feed_url, input).await?;

    let xml = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read feed file {}", input.display()))?;
    let items = parse_feed(&xml)?;
    let catalogue = build_catalogue(items, &config.feed_url);

    let bytes_written = write_catalogue(&catalogue, output)?;

    println!(
        "wrote {} products to {} ({} KB)",
        catalogue.meta.total_products,
        output.display(),
        bytes_written / 1024
    );
    println!(
        "categories: {}",
        render_category_counts(catalogue.meta.categories.iter())
    );

    Ok(())
}

/// Serializes the catalogue and publishes it atomically.
///
/// Returns the number of bytes written. The temp file lives next to the
/// target so the rename stays on one filesystem.
pub(crate) fn write_catalogue(catalogue: &Catalogue, output: &Path) -> anyhow::Result<usize> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output dir {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(catalogue)?;

    let tmp = sibling_tmp_path(output);
    std::fs::write(&tmp, &json)
        .with_context(|| format!("failed to write temp catalogue {}", tmp.display()))?;
    std::fs::rename(&tmp, output).with_context(|| {
        format!(
            "failed to move catalogue into place at {}",
            output.display()
        )
    })?;

    Ok(json.len())
}

fn sibling_tmp_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map_or_else(|| std::ffi::OsString::from("catalogue"), ToOwned::to_owned);
    name.push(".tmp");
    output.with_file_name(name)
}

fn render_category_counts<'a>(
    counts: impl Iterator<Item = (&'a CategorySlug, &'a usize)>,
) -> String {
    counts
        .map(|(slug, count)| format!("{slug}={count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
