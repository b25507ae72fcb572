//! JSON cache report
//!
//! Same shape the data update job writes to `data/cache.json`, with the
//! leaderboard precomputed:
//!
//! ```text
//! { "lastUpdated": "...", "topSongs": [RankedTrack...], "artists": [Artist...] }
//! ```

use crate::catalog::Artist;
use crate::ranking::RankedTrack;
use crate::report::Page;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<&'a str>,
    pub top_songs: &'a [RankedTrack],
    pub artists: &'a [Artist],
}

impl<'a> CacheReport<'a> {
    pub fn from_page(page: &'a Page<'a>) -> Self {
        Self {
            last_updated: page.catalog.last_updated.as_deref(),
            top_songs: &page.top_songs,
            artists: &page.catalog.artists,
        }
    }
}

pub fn write<W: Write>(writer: &mut W, page: &Page<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &CacheReport::from_page(page))?;
    writeln!(writer)
}
