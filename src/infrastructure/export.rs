//! JSON export of extracted listings and the console summary

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::domain::Listing;

/// Listings shown individually in the summary
pub const SUMMARY_LIMIT: usize = 5;

/// Write listings as a pretty-printed JSON array, replacing any existing file.
///
/// Non-ASCII text is written as-is; an empty slice produces `[]`.
pub async fn save_to_json(listings: &[Listing], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(listings).context("Failed to serialize listings")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    info!("💾 Saved {} listings to {}", listings.len(), path.display());
    Ok(())
}

/// Read listings back from a file written by [`save_to_json`]
pub async fn load_from_json(path: &Path) -> Result<Vec<Listing>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read output file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Malformed listings file: {}", path.display()))
}

/// Numbered lines for the first [`SUMMARY_LIMIT`] listings, plus a
/// remainder line when there are more
pub fn summary_lines(listings: &[Listing]) -> Vec<String> {
    let mut lines: Vec<String> = listings
        .iter()
        .take(SUMMARY_LIMIT)
        .enumerate()
        .map(|(i, listing)| format!("{}. {}", i + 1, listing.summary_line()))
        .collect();

    if listings.len() > SUMMARY_LIMIT {
        lines.push(format!("... and {} more", listings.len() - SUMMARY_LIMIT));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback_listings;
    use tempfile::tempdir;

    #[test]
    fn test_summary_without_remainder() {
        let lines = summary_lines(&fallback_listings());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1. Apple 15 Pro - 1 229,00 €");
    }

    #[test]
    fn test_summary_with_remainder() {
        let mut listings = fallback_listings();
        listings.extend(fallback_listings());
        listings.extend(fallback_listings());

        let lines = summary_lines(&listings);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "... and 10 more");
    }

    #[test]
    fn test_summary_empty() {
        assert!(summary_lines(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_empty_sequence_written_as_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("smartphones.json");

        save_to_json(&[], &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("smartphones.json");

        save_to_json(&fallback_listings(), &path).await.unwrap();

        assert_eq!(load_from_json(&path).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_layout_uses_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("smartphones.json");

        save_to_json(&fallback_listings()[..1], &path).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"title\""));
        assert!(content.contains("\"source\": \"fallback\""));
        assert!(content.contains("1 229,00 €"));
    }
}
