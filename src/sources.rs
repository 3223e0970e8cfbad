use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Read the URL list: one address per line, trimmed, blank lines dropped.
/// Order is kept as-is and duplicates are not collapsed, so output rows line
/// up 1:1 with the input file.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list {}", path.display()))?;

    let urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    info!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}
