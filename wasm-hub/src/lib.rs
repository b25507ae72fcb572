use artisthub::overlay::{CloseTrigger, Overlay};
use artisthub::ranking::{rank_top_songs, RankedTrack};
use artisthub::report::{freshness, html};
use artisthub::Catalog;
use chrono::DateTime;
use wasm_bindgen::prelude::*;

/// Browser-side controller: holds the loaded catalog, the leaderboard,
/// and the artist overlay state. The page script forwards DOM events here
/// and writes back whatever markup it returns.
#[wasm_bindgen]
pub struct ArtistHub {
    catalog: Catalog,
    top_songs: Vec<RankedTrack>,
    overlay: Overlay,
    used_fallback: bool,
}

#[wasm_bindgen]
impl ArtistHub {
    /// Build from the fetched response body, or `undefined` if the fetch
    /// failed. Anything that doesn't parse falls back to the built-in catalog.
    #[wasm_bindgen(constructor)]
    pub fn new(payload: Option<String>) -> ArtistHub {
        let parsed = payload.as_deref().map(Catalog::parse);
        let (catalog, used_fallback) = match parsed {
            Some(Ok(catalog)) => (catalog, false),
            Some(Err(e)) => {
                warn(&format!("using fallback catalog: {}", e));
                (Catalog::fallback(), true)
            }
            None => (Catalog::fallback(), true),
        };

        ArtistHub {
            top_songs: rank_top_songs(&catalog),
            catalog,
            overlay: Overlay::new(),
            used_fallback,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn top_songs_html(&self) -> String {
        html::top_songs_grid(&self.top_songs)
    }

    pub fn artists_html(&self) -> String {
        html::artists_grid(&self.catalog.artists)
    }

    /// `now_ms` is `Date.now()` from the page.
    pub fn last_updated_text(&self, now_ms: f64) -> Option<String> {
        if !now_ms.is_finite() {
            return None;
        }
        let now = DateTime::from_timestamp_millis(now_ms as i64)?;
        freshness(self.catalog.last_updated.as_deref()?, now)
    }

    /// Leaderboard as plain JS objects
    pub fn top_songs(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.top_songs).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Open the overlay on an artist. Returns the overlay markup, or
    /// `undefined` (and leaves the overlay as it was) for an unknown id.
    pub fn select_artist(&mut self, id: &str) -> Option<String> {
        self.overlay
            .select(&self.catalog.artists, id)
            .map(|detail| html::artist_detail(&detail))
    }

    pub fn close_button(&mut self) {
        self.overlay.close(CloseTrigger::CloseButton);
    }

    pub fn backdrop_click(&mut self) {
        self.overlay.close(CloseTrigger::Backdrop);
    }

    /// Returns true when the key closed the overlay.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.overlay.handle_key(key)
    }

    #[wasm_bindgen(getter)]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    #[wasm_bindgen(getter)]
    pub fn open_artist_id(&self) -> Option<String> {
        self.overlay.open_artist_id().map(str::to_string)
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_msg: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "lastUpdated": "2026-01-15T10:00:00Z",
        "artists": [
            {"id": "a", "name": "Artist A", "tracks": [
                {"id": "a1", "title": "First", "popularity": 85, "youtubeViews": 2500000}
            ]},
            {"id": "b", "name": "Artist B", "tracks": [
                {"id": "b1", "title": "Second", "popularity": 92, "youtubeViews": 5000000}
            ]},
            {"id": "c", "name": "Artist C", "tracks": []}
        ]
    }"#;

    // ==========================================================================
    // LOADING TESTS
    // ==========================================================================

    #[test]
    fn test_payload_is_used() {
        let hub = ArtistHub::new(Some(CATALOG.to_string()));
        assert!(!hub.used_fallback());

        let html = hub.top_songs_html();
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first, "higher composite score renders first");
    }

    #[test]
    fn test_missing_or_bad_payload_falls_back() {
        assert!(ArtistHub::new(None).used_fallback());

        let hub = ArtistHub::new(Some("<html>".to_string()));
        assert!(hub.used_fallback());
        assert!(hub.artists_html().contains("Luna Wave"));
    }

    #[test]
    fn test_empty_catalog_renders_empty_states() {
        let hub = ArtistHub::new(Some(r#"{"artists": []}"#.to_string()));
        assert_eq!(hub.top_songs_html(), html::EMPTY_TOP_SONGS);
        assert_eq!(hub.artists_html(), html::EMPTY_ARTISTS);
    }

    #[test]
    fn test_last_updated_text() {
        let hub = ArtistHub::new(Some(CATALOG.to_string()));
        // 2026-01-15T10:07:00Z
        let now_ms = 1_768_471_620_000.0;
        assert_eq!(hub.last_updated_text(now_ms).as_deref(), Some("Updated 7 minutes ago"));
        assert_eq!(hub.last_updated_text(f64::NAN), None);
    }

    // ==========================================================================
    // OVERLAY TESTS
    // ==========================================================================

    #[test]
    fn test_select_and_close() {
        let mut hub = ArtistHub::new(Some(CATALOG.to_string()));
        assert!(!hub.is_open());

        let markup = hub.select_artist("b").unwrap();
        assert!(markup.contains("Artist B"));
        assert!(hub.is_open());
        assert_eq!(hub.open_artist_id().as_deref(), Some("b"));

        hub.close_button();
        assert!(!hub.is_open());

        hub.select_artist("c");
        hub.backdrop_click();
        assert!(!hub.is_open());

        hub.select_artist("a");
        assert!(!hub.key_down("Tab"));
        assert!(hub.key_down("Escape"));
        assert!(!hub.is_open());
    }

    #[test]
    fn test_unknown_artist_stays_closed() {
        let mut hub = ArtistHub::new(Some(CATALOG.to_string()));
        assert!(hub.select_artist("zzz").is_none());
        assert!(!hub.is_open());
    }

    #[test]
    fn test_artist_without_tracks() {
        let mut hub = ArtistHub::new(Some(CATALOG.to_string()));
        let markup = hub.select_artist("c").unwrap();
        assert!(markup.contains(html::EMPTY_RELEASES));
    }
}
