//! Artist detail overlay
//!
//! The overlay is a two-state machine:
//!
//! ```text
//!            select(id) [id found]
//!   Closed ─────────────────────────▶ Open { artist_id }
//!     ▲                                   │
//!     └────── close button / backdrop / Escape
//! ```
//!
//! Selecting an unknown artist is a no-op in either state. Selecting a
//! different artist while open swaps the content and stays open.

use crate::catalog::{Artist, Track};

/// Maximum number of tracks listed in the overlay.
pub const DETAIL_TRACK_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open { artist_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

/// What the overlay shows for one artist: the artist and its most recent
/// tracks, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtistDetail<'a> {
    pub artist: &'a Artist,
    pub tracks: &'a [Track],
}

impl<'a> ArtistDetail<'a> {
    pub fn of(artist: &'a Artist) -> Self {
        let shown = artist.tracks.len().min(DETAIL_TRACK_LIMIT);
        Self {
            artist,
            tracks: &artist.tracks[..shown],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    pub fn open_artist_id(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Open { artist_id } => Some(artist_id.as_str()),
            OverlayState::Closed => None,
        }
    }

    /// Open the overlay on the artist with `id`, returning what to show.
    /// Returns `None` and leaves the state alone if no such artist exists.
    pub fn select<'a>(&mut self, artists: &'a [Artist], id: &str) -> Option<ArtistDetail<'a>> {
        let artist = artists.iter().find(|a| a.id == id)?;
        self.state = OverlayState::Open {
            artist_id: artist.id.clone(),
        };
        Some(ArtistDetail::of(artist))
    }

    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.is_open() {
            log::debug!("overlay closed via {:?}", trigger);
        }
        self.state = OverlayState::Closed;
    }

    /// Returns true if the key closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != "Escape" || !self.is_open() {
            return false;
        }
        self.close(CloseTrigger::EscapeKey);
        true
    }
}
