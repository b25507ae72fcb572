//! Cross-artist "top songs" ranking
//!
//! Every artist's tracks are flattened into one list, each track gets a
//! composite score, and the list is sorted descending and truncated.
//!
//! # Scoring
//!
//! ```text
//! composite = popularity * 0.7 + view_score * 0.3
//! view_score = min(views / 10,000,000, 1.0) * 100
//! ```
//!
//! Platform popularity is already on a 0-100 scale and dominates the
//! ranking. View counts are a secondary signal that saturates at the cap:
//! 10M and 50M views contribute the same 30 points.
//!
//! | Popularity | Views | Composite |
//! |------------|-------|-----------|
//! | 85         | 2.5M  | 59.5 + 7.5 = 67.0 |
//! | 92         | 5M    | 64.4 + 15.0 = 79.4 |
//! | 0          | 10M+  | 0 + 30.0 = 30.0 |
//!
//! Missing popularity or views count as zero. Ties keep catalog order
//! (artist order, then track order) since the sort is stable. Nothing here
//! allocates into or borrows from the catalog past the call.

use crate::catalog::{Catalog, Track};
use serde::Serialize;

/// Number of tracks on the leaderboard.
pub const TOP_SONGS_COUNT: usize = 3;

/// View count at which the view score saturates.
pub const VIEW_CAP: f64 = 10_000_000.0;

pub const PLATFORM_WEIGHT: f64 = 0.7;
pub const VIEW_WEIGHT: f64 = 0.3;

/// A track annotated with its artist and composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTrack {
    #[serde(flatten)]
    pub track: Track,
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_image: Option<String>,
    pub composite_score: f64,
}

pub fn platform_score(track: &Track) -> f64 {
    track.popularity.unwrap_or(0.0)
}

pub fn view_score(track: &Track) -> f64 {
    let views = track.youtube_views.unwrap_or(0) as f64;
    (views / VIEW_CAP).min(1.0) * 100.0
}

pub fn composite_score(track: &Track) -> f64 {
    platform_score(track) * PLATFORM_WEIGHT + view_score(track) * VIEW_WEIGHT
}

/// Every track of every artist, scored, in catalog order.
pub fn flatten(catalog: &Catalog) -> Vec<RankedTrack> {
    catalog
        .artists
        .iter()
        .flat_map(|artist| {
            artist.tracks.iter().map(move |track| RankedTrack {
                track: track.clone(),
                artist_name: artist.name.clone(),
                artist_image: artist.image.clone(),
                composite_score: composite_score(track),
            })
        })
        .collect()
}

/// Top `k` tracks across all artists, highest composite score first.
pub fn rank_top(catalog: &Catalog, k: usize) -> Vec<RankedTrack> {
    let mut ranked = flatten(catalog);
    ranked.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    ranked.truncate(k);
    ranked
}

pub fn rank_top_songs(catalog: &Catalog) -> Vec<RankedTrack> {
    rank_top(catalog, TOP_SONGS_COUNT)
}
