//! Catalog data model
//!
//! A [`Catalog`] is the whole artists + tracks document for one page load.
//! It is decoded leniently: every optional field defaults, `null` track
//! lists become empty, and the key names written by the data update script
//! (`imageUrl`, `latestReleases`, `coverUrl`) are accepted as aliases.
//! A mistyped metric on one track reads as absent rather than rejecting
//! the document, and numeric ids are taken as strings.
//!
//! ```text
//! {
//!   "lastUpdated": "2026-01-15T10:00:00Z",
//!   "artists": [
//!     { "id": "bnick", "name": "BNick", "image": "...",
//!       "tracks": [ { "id": "t1", "title": "Summer Nights",
//!                     "popularity": 85, "youtubeViews": 2500000,
//!                     "spotifyUrl": "...", "youtubeUrl": "..." } ] }
//!   ]
//! }
//! ```

use chrono::{SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Image shown when an artist or track has no artwork.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON of the expected shape: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ArtistRecord")]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub profile: ArtistLinks,
    pub tracks: Vec<Track>,
}

/// Wire shape of an artist. Both the page's key names and the update
/// script's may be present at once; the page's win.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtistRecord {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image_url: Option<String>,
    #[serde(flatten)]
    profile: ArtistLinks,
    #[serde(default)]
    tracks: Option<Vec<Track>>,
    #[serde(default)]
    latest_releases: Option<Vec<Track>>,
}

impl From<ArtistRecord> for Artist {
    fn from(r: ArtistRecord) -> Self {
        Artist {
            id: r.id,
            name: r.name,
            image: r.image.filter(|u| !u.is_empty()).or(r.image_url),
            profile: r.profile,
            tracks: r.tracks.or(r.latest_releases).unwrap_or_default(),
        }
    }
}

/// Links to an artist's profile page on each platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_music: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audiomack: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TrackRecord")]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Platform-native popularity, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_views: Option<u64>,
    #[serde(flatten)]
    pub links: PlatformLinks,
}

/// Wire shape of a track. A mistyped metric reads as absent instead of
/// failing the whole catalog.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    id: String,
    #[serde(deserialize_with = "string_or_number")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    cover_art: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    cover_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    popularity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    youtube_views: Option<u64>,
    #[serde(flatten)]
    links: PlatformLinks,
}

impl From<TrackRecord> for Track {
    fn from(r: TrackRecord) -> Self {
        Track {
            id: r.id,
            title: r.title,
            cover_art: r.cover_art.filter(|u| !u.is_empty()).or(r.cover_url),
            release_date: r.release_date,
            popularity: r.popularity,
            youtube_views: r.youtube_views,
            links: r.links,
        }
    }
}

/// Per-track listening links. Each platform is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_music_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audiomack_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Spotify,
    YouTube,
    AppleMusic,
    Audiomack,
}

impl Platform {
    /// Display order for link buttons.
    pub const ALL: [Platform; 4] = [
        Platform::Spotify,
        Platform::YouTube,
        Platform::AppleMusic,
        Platform::Audiomack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::YouTube => "YouTube",
            Platform::AppleMusic => "Apple",
            Platform::Audiomack => "Audiomack",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::YouTube => "youtube",
            Platform::AppleMusic => "apple",
            Platform::Audiomack => "audiomack",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Platform::Spotify => "♫",
            Platform::YouTube => "▶",
            Platform::AppleMusic => "🍎",
            Platform::Audiomack => "🎵",
        }
    }
}

impl PlatformLinks {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let url = match platform {
            Platform::Spotify => &self.spotify_url,
            Platform::YouTube => &self.youtube_url,
            Platform::AppleMusic => &self.apple_music_url,
            Platform::Audiomack => &self.audiomack_url,
        };
        url.as_deref().filter(|u| !u.is_empty())
    }

    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|url| (p, url)))
    }
}

impl ArtistLinks {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let url = match platform {
            Platform::Spotify => &self.spotify,
            Platform::YouTube => &self.youtube,
            Platform::AppleMusic => &self.apple_music,
            Platform::Audiomack => &self.audiomack,
        };
        url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|url| (p, url)))
    }
}

impl Artist {
    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

impl Track {
    pub fn cover_or_placeholder(&self) -> &str {
        self.cover_art
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find_artist(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn track_count(&self) -> usize {
        self.artists.iter().map(|a| a.tracks.len()).sum()
    }

    /// Built-in catalog used whenever the live document can't be trusted.
    pub fn fallback() -> Self {
        let track = |n: u32, title: &str, cover: &str, date: &str, pop: f64, views: u64| Track {
            id: format!("track{}", n),
            title: title.to_string(),
            cover_art: Some(format!("https://i.scdn.co/image/{}", cover)),
            release_date: Some(date.to_string()),
            popularity: Some(pop),
            youtube_views: Some(views),
            links: PlatformLinks {
                spotify_url: Some(format!("https://open.spotify.com/track/example{}", n)),
                ..PlatformLinks::default()
            },
        };

        let mut summer_nights = track(
            1,
            "Summer Nights",
            "ab67616d0000b273a1b5c3d7e8f9a2b4c5d6e7f8",
            "2026-01-15",
            85.0,
            2_500_000,
        );
        summer_nights.links.youtube_url = Some("https://youtube.com/watch?v=example1".into());
        summer_nights.links.apple_music_url = Some("https://music.apple.com/song/example1".into());
        summer_nights.links.audiomack_url = Some("https://audiomack.com/song/example1".into());

        let mut midnight_drive = track(
            2,
            "Midnight Drive",
            "ab67616d0000b273b2c3d4e5f6a7b8c9d0e1f2a3",
            "2025-12-20",
            78.0,
            1_800_000,
        );
        midnight_drive.links.youtube_url = Some("https://youtube.com/watch?v=example2".into());
        midnight_drive.links.apple_music_url = Some("https://music.apple.com/song/example2".into());

        let mut ocean_dreams = track(
            3,
            "Ocean Dreams",
            "ab67616d0000b273c5d6e7f8a9b0c1d2e3f4a5b6",
            "2026-01-10",
            92.0,
            5_000_000,
        );
        ocean_dreams.links.youtube_url = Some("https://youtube.com/watch?v=example3".into());

        let city_lights = track(
            4,
            "City Lights",
            "ab67616d0000b273d7e8f9a0b1c2d3e4f5a6b7c8",
            "2026-01-05",
            88.0,
            3_200_000,
        );

        Catalog {
            last_updated: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            artists: vec![
                Artist {
                    id: "bnick".into(),
                    name: "BNick".into(),
                    image: Some("https://i.scdn.co/image/ab6761610000e5eb8c1e066b5c1d3f6b2b3c8e1a".into()),
                    profile: ArtistLinks {
                        spotify: Some("https://open.spotify.com/artist/example".into()),
                        youtube: Some("https://youtube.com/@bnick".into()),
                        apple_music: Some("https://music.apple.com/artist/example".into()),
                        audiomack: Some("https://audiomack.com/bnick".into()),
                    },
                    tracks: vec![summer_nights, midnight_drive],
                },
                Artist {
                    id: "artist2".into(),
                    name: "Luna Wave".into(),
                    image: Some("https://i.scdn.co/image/ab6761610000e5ebc4d5e6f7a8b9c0d1e2f3a4b5".into()),
                    profile: ArtistLinks {
                        spotify: Some("https://open.spotify.com/artist/example2".into()),
                        ..ArtistLinks::default()
                    },
                    tracks: vec![ocean_dreams],
                },
                Artist {
                    id: "artist3".into(),
                    name: "Echo Rivera".into(),
                    image: Some("https://i.scdn.co/image/ab6761610000e5ebd6e7f8a9b0c1d2e3f4a5b6c7".into()),
                    profile: ArtistLinks {
                        spotify: Some("https://open.spotify.com/artist/example3".into()),
                        ..ArtistLinks::default()
                    },
                    tracks: vec![city_lights],
                },
            ],
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids and titles are strings, but a bare number is taken as its text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(D::Error::custom(format!("expected a string or number, got {}", other))),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn as_number(value: Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(as_number))
}

/// View counts: any non-negative number, fractional part dropped.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        Some(value) => value,
        None => return Ok(None),
    };
    if let Some(n) = value.as_u64() {
        return Ok(Some(n));
    }
    Ok(as_number(value)
        .filter(|n| *n >= 0.0 && *n <= u64::MAX as f64)
        .map(|n| n.trunc() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // DECODING TESTS
    // ==========================================================================
    //
    // The catalog is hand-edited or script-generated JSON, so decoding must
    // tolerate missing optional fields, nulls, and the update script's
    // alternate key names.
    // ==========================================================================

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "lastUpdated": "2026-01-15T10:00:00Z",
            "artists": [{
                "id": "bnick",
                "name": "BNick",
                "image": "https://img/bnick.jpg",
                "spotify": "https://open.spotify.com/artist/x",
                "tracks": [{
                    "id": "t1",
                    "title": "Summer Nights",
                    "coverArt": "https://img/cover.jpg",
                    "releaseDate": "2026-01-15",
                    "popularity": 85,
                    "youtubeViews": 2500000,
                    "spotifyUrl": "https://open.spotify.com/track/1",
                    "audiomackUrl": "https://audiomack.com/song/1"
                }]
            }]
        }"#;

        let catalog = Catalog::parse(json).unwrap();
        assert_eq!(catalog.last_updated.as_deref(), Some("2026-01-15T10:00:00Z"));
        assert_eq!(catalog.artists.len(), 1);

        let artist = &catalog.artists[0];
        assert_eq!(artist.profile.spotify.as_deref(), Some("https://open.spotify.com/artist/x"));

        let track = &artist.tracks[0];
        assert_eq!(track.popularity, Some(85.0));
        assert_eq!(track.youtube_views, Some(2_500_000));
        assert_eq!(track.links.spotify_url.as_deref(), Some("https://open.spotify.com/track/1"));
        assert_eq!(track.links.youtube_url, None);
        assert_eq!(track.links.audiomack_url.as_deref(), Some("https://audiomack.com/song/1"));
    }

    #[test]
    fn test_parse_minimal_track() {
        // Only the title is required on a track
        let json = r#"{"artists": [{"id": "a", "name": "A", "tracks": [{"title": "Untitled"}]}]}"#;
        let catalog = Catalog::parse(json).unwrap();
        let track = &catalog.artists[0].tracks[0];

        assert_eq!(track.id, "");
        assert_eq!(track.popularity, None);
        assert_eq!(track.youtube_views, None);
        assert_eq!(track.links, PlatformLinks::default());
        assert_eq!(catalog.last_updated, None);
    }

    #[test]
    fn test_null_and_missing_tracks_are_empty() {
        let json = r#"{"artists": [
            {"id": "a", "name": "A", "tracks": null},
            {"id": "b", "name": "B"}
        ]}"#;
        let catalog = Catalog::parse(json).unwrap();

        assert!(catalog.artists[0].tracks.is_empty());
        assert!(catalog.artists[1].tracks.is_empty());
        assert_eq!(catalog.track_count(), 0);
    }

    #[test]
    fn test_null_artists_is_empty() {
        let catalog = Catalog::parse(r#"{"lastUpdated": "x", "artists": null}"#).unwrap();
        assert!(catalog.artists.is_empty());
    }

    #[test]
    fn test_update_script_aliases() {
        // The update script writes imageUrl / latestReleases / coverUrl and a
        // precomputed topSongs list, which is ignored.
        let json = r#"{
            "lastUpdated": "2026-01-15T10:00:00.123456Z",
            "topSongs": [{"id": "x", "title": "ignored", "score": 99}],
            "artists": [{
                "id": "4Z8W4fKeB5YxbusRsdQVPb",
                "name": "Luna Wave",
                "imageUrl": "https://img/luna.jpg",
                "latestReleases": [{
                    "title": "Ocean Dreams",
                    "releaseDate": "2026-01-10",
                    "coverUrl": "https://img/ocean.jpg",
                    "spotifyUrl": "https://open.spotify.com/album/1"
                }]
            }]
        }"#;
        let catalog = Catalog::parse(json).unwrap();
        let artist = &catalog.artists[0];

        assert_eq!(artist.image.as_deref(), Some("https://img/luna.jpg"));
        assert_eq!(artist.tracks.len(), 1);
        assert_eq!(artist.tracks[0].cover_art.as_deref(), Some("https://img/ocean.jpg"));
    }

    #[test]
    fn test_mistyped_metrics_read_leniently() {
        let json = r#"{"artists": [{"id": "a", "name": "A", "tracks": [
            {"id": "t1", "title": "Float Views", "popularity": 85, "youtubeViews": 2500000.0},
            {"id": "t2", "title": "Exp Views", "youtubeViews": 2.5e6},
            {"id": "t3", "title": "String Pop", "popularity": "85", "youtubeViews": "1200"},
            {"id": "t4", "title": "Garbage", "popularity": {"x": 1}, "youtubeViews": -5},
            {"id": "t5", "title": "Fine", "popularity": 70, "youtubeViews": 1000}
        ]}]}"#;
        let catalog = Catalog::parse(json).unwrap();
        let tracks = &catalog.artists[0].tracks;

        assert_eq!(tracks.len(), 5);
        assert_eq!(tracks[0].youtube_views, Some(2_500_000));
        assert_eq!(tracks[1].youtube_views, Some(2_500_000));
        assert_eq!(tracks[2].popularity, Some(85.0));
        assert_eq!(tracks[2].youtube_views, Some(1200));
        assert_eq!(tracks[3].popularity, None);
        assert_eq!(tracks[3].youtube_views, None);
        assert_eq!(tracks[4].popularity, Some(70.0));
        assert_eq!(tracks[4].youtube_views, Some(1000));
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let json = r#"{"artists": [{"id": 7, "name": "Seven", "tracks": [{"id": 1, "title": "One"}]}]}"#;
        let catalog = Catalog::parse(json).unwrap();

        assert_eq!(catalog.artists[0].id, "7");
        assert_eq!(catalog.artists[0].tracks[0].id, "1");
        assert!(catalog.find_artist("7").is_some());
    }

    #[test]
    fn test_both_key_names_present() {
        let json = r#"{"artists": [{
            "id": "a", "name": "A",
            "image": "https://img/page.jpg",
            "imageUrl": "https://img/script.jpg",
            "tracks": [{"title": "Kept", "coverArt": "", "coverUrl": "https://img/c.jpg"}],
            "latestReleases": [{"title": "Ignored"}]
        }]}"#;
        let catalog = Catalog::parse(json).unwrap();
        let artist = &catalog.artists[0];

        assert_eq!(artist.image.as_deref(), Some("https://img/page.jpg"));
        assert_eq!(artist.tracks.len(), 1);
        assert_eq!(artist.tracks[0].title, "Kept");
        assert_eq!(artist.tracks[0].cover_art.as_deref(), Some("https://img/c.jpg"));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(Catalog::parse("not json").is_err());
        assert!(Catalog::parse(r#"{"artists": "nope"}"#).is_err());
        assert!(Catalog::parse(r#"{"artists": [{"id": "a"}]}"#).is_err());
        assert!(Catalog::parse(r#"[1, 2, 3]"#).is_err());
        assert!(Catalog::parse(r#"{"artists": [{"id": [1], "name": "A"}]}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let catalog = Catalog::fallback();
        let json = serde_json::to_string(&catalog).unwrap();

        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"youtubeViews\":2500000"));
        assert!(json.contains("\"appleMusicUrl\""));
        assert!(json.contains("\"appleMusic\""));
        assert!(!json.contains("apple_music"));

        // And it decodes back to the same artists
        let back = Catalog::parse(&json).unwrap();
        assert_eq!(back.artists, catalog.artists);
    }

    // ==========================================================================
    // LINK AND PLACEHOLDER TESTS
    // ==========================================================================

    #[test]
    fn test_platform_links_iter_order_and_presence() {
        let links = PlatformLinks {
            spotify_url: None,
            youtube_url: Some("https://yt/1".into()),
            apple_music_url: Some(String::new()),
            audiomack_url: Some("https://am/1".into()),
        };
        let present: Vec<_> = links.iter().collect();

        // Empty strings count as absent
        assert_eq!(
            present,
            vec![(Platform::YouTube, "https://yt/1"), (Platform::Audiomack, "https://am/1")]
        );
    }

    #[test]
    fn test_placeholders() {
        let artist = Artist { id: "a".into(), name: "A".into(), ..Artist::default() };
        assert_eq!(artist.image_or_placeholder(), PLACEHOLDER_IMAGE);

        let track = Track { title: "T".into(), cover_art: Some("https://c".into()), ..Track::default() };
        assert_eq!(track.cover_or_placeholder(), "https://c");
    }

    // ==========================================================================
    // FALLBACK DOCUMENT TESTS
    // ==========================================================================

    #[test]
    fn test_fallback_shape() {
        let catalog = Catalog::fallback();

        assert_eq!(catalog.artists.len(), 3);
        assert_eq!(catalog.track_count(), 4);
        assert!(catalog.last_updated.is_some());
        assert_eq!(catalog.find_artist("artist2").map(|a| a.name.as_str()), Some("Luna Wave"));
        assert!(catalog.find_artist("missing").is_none());

        let summer = &catalog.artists[0].tracks[0];
        assert_eq!(summer.title, "Summer Nights");
        assert_eq!(summer.links.iter().count(), 4);
        assert_eq!(
            summer.links.spotify_url.as_deref(),
            Some("https://open.spotify.com/track/example1")
        );
    }

    #[test]
    fn test_find_artist_returns_first_match() {
        let catalog = Catalog {
            last_updated: None,
            artists: vec![
                Artist { id: "dup".into(), name: "First".into(), ..Artist::default() },
                Artist { id: "dup".into(), name: "Second".into(), ..Artist::default() },
            ],
        };
        assert_eq!(catalog.find_artist("dup").unwrap().name, "First");
    }
}
