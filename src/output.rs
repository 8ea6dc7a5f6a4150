//! JSON file writers for scrape results.
//!
//! Every write overwrites whatever already exists at the target path and
//! creates parent directories as needed; re-running a scrape for the same
//! date replaces that date's files wholesale.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs;

use crate::models::{CountSummary, RegionResult, TotalResult};

/// Root of the output tree, relative to the working directory.
pub const BASE_DIR: &str = "location";

/// `<base>/<year>/<slug>/<slug>_<date>.json`
pub fn region_file(base: &Path, year: &str, slug: &str, date: &str) -> PathBuf {
    base.join(year)
        .join(slug)
        .join(format!("{slug}_{date}.json"))
}

/// `<base>/count/starbucks-count_<date>.json`
pub fn count_file(base: &Path, date: &str) -> PathBuf {
    base.join("count")
        .join(format!("starbucks-count_{date}.json"))
}

/// `<base>/total/starbucks-total_<date>.json`
pub fn total_file(base: &Path, date: &str) -> PathBuf {
    base.join("total")
        .join(format!("starbucks-total_{date}.json"))
}

/// Pre-creates the fixed output skeleton (`count/`, `total/`, `<year>/`),
/// so even a run that dies during bootstrap leaves the expected tree.
pub async fn prepare_output_dirs(base: &Path, year: &str) -> Result<()> {
    for dir in [base.join("count"), base.join("total"), base.join(year)] {
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

pub async fn write_region_result(
    base: &Path,
    year: &str,
    slug: &str,
    result: &RegionResult,
) -> Result<PathBuf> {
    let path = region_file(base, year, slug, &result.date);
    write_pretty_json(&path, result).await?;
    Ok(path)
}

pub async fn write_count_summary(base: &Path, summary: &CountSummary) -> Result<PathBuf> {
    let path = count_file(base, &summary.date);
    write_pretty_json(&path, summary).await?;
    Ok(path)
}

pub async fn write_total_result(base: &Path, total: &TotalResult) -> Result<PathBuf> {
    let path = total_file(base, &total.date);
    write_pretty_json(&path, total).await?;
    Ok(path)
}

async fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
