//! Page and report generation
//!
//! This module turns a loaded catalog into output:
//!
//! - **HTML**: the showcase page (top songs, artist grid, last-updated
//!   indicator, artist overlay) plus the fragments it is built from
//! - **JSON**: the cache report `{ lastUpdated, topSongs, artists }`
//!
//! # Usage
//!
//! ```ignore
//! use artisthub::{report, Catalog};
//!
//! let catalog = Catalog::fallback();
//! let page = report::Page::build(&catalog, chrono::Utc::now());
//! report::generate("site/index.html", &page)?;  // HTML
//! report::generate("site/cache.json", &page)?;  // JSON
//! ```

pub mod html;
pub mod json;

use crate::catalog::Catalog;
use crate::ranking::{self, RankedTrack};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::io;
use std::path::Path;

/// Everything needed to render one page view.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub catalog: &'a Catalog,
    pub top_songs: Vec<RankedTrack>,
    pub last_updated_text: Option<String>,
}

impl<'a> Page<'a> {
    pub fn build(catalog: &'a Catalog, now: DateTime<Utc>) -> Self {
        Self {
            catalog,
            top_songs: ranking::rank_top_songs(catalog),
            last_updated_text: catalog
                .last_updated
                .as_deref()
                .and_then(|ts| freshness(ts, now)),
        }
    }
}

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, page: &Page<'_>) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, page),
        _ => html::write(&mut file, page),
    }
}

/// Human-readable age of the catalog, e.g. "Updated 5 minutes ago".
///
/// Returns `None` when the timestamp can't be parsed.
pub fn freshness(last_updated: &str, now: DateTime<Utc>) -> Option<String> {
    let updated = parse_timestamp(last_updated)?;
    let minutes = (now - updated).num_minutes().max(0);

    let text = if minutes < 60 {
        format!("Updated {} minutes ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        format!("Updated {} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else {
        format!("Updated {}", updated.format("%-m/%-d/%Y"))
    };
    Some(text)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // No offset: treat as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Summary statistics for a loaded catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub artists: usize,
    pub tracks: usize,
    pub artists_without_tracks: usize,
}

impl Summary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut summary = Self::default();
        summary.artists = catalog.artists.len();

        for artist in &catalog.artists {
            summary.tracks += artist.tracks.len();
            if artist.tracks.is_empty() {
                summary.artists_without_tracks += 1;
            }
        }

        summary
    }
}
