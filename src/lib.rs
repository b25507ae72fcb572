//! Artist Hub - music artist showcase pages
//!
//! Artist Hub loads a catalog of artists and their tracks, ranks every track
//! across all artists into a short "top songs" leaderboard, and renders a
//! page with the leaderboard, an artist grid, and a per-artist detail
//! overlay.
//!
//! # Pipeline
//!
//! ```text
//! loader ──▶ catalog ──▶ ranking ──▶ report (HTML / JSON)
//!                 │
//!                 └──▶ overlay (artist detail, Closed / Open)
//! ```
//!
//! 1. **Load**: fetch `data/cache.json` (or any path / URL) once. On any
//!    failure the built-in fallback catalog is used instead.
//! 2. **Rank**: flatten all tracks, score each one, keep the top 3.
//! 3. **Render**: produce the page, escaping every catalog-sourced string.
//!
//! # Quick Start
//!
//! ```no_run
//! use artisthub::{rank_top_songs, Catalog};
//!
//! let catalog = Catalog::fallback();
//! for (i, song) in rank_top_songs(&catalog).iter().enumerate() {
//!     println!("#{} {} - {} ({:.1})", i + 1, song.track.title, song.artist_name, song.composite_score);
//! }
//! ```
//!
//! # Scoring System
//!
//! | Signal | Scale | Weight |
//! |--------|-------|--------|
//! | Platform popularity | 0-100 | 0.7 |
//! | Video views | 0-100 (10M views = 100, capped) | 0.3 |
//!
//! # Modules
//!
//! - [`catalog`]: Catalog, artist and track types plus the fallback document
//! - [`ranking`]: Composite score and leaderboard
//! - [`overlay`]: Artist detail overlay state
//! - [`report`]: Output formatters (HTML, JSON)
//! - `loader`, `serve`: fetch-or-fallback loading and the preview server
//!   (`cli` feature)

pub mod catalog;
#[cfg(feature = "cli")]
pub mod loader;
pub mod overlay;
pub mod ranking;
pub mod report;
#[cfg(feature = "cli")]
pub mod serve;

pub use catalog::{Artist, Catalog, Platform, PlatformLinks, Track};
#[cfg(feature = "cli")]
pub use loader::{CatalogSource, Loaded, Origin};
pub use overlay::{ArtistDetail, CloseTrigger, Overlay, OverlayState};
pub use ranking::{rank_top, rank_top_songs, RankedTrack, TOP_SONGS_COUNT};
