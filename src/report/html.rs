//! HTML page generation for the artist showcase

use crate::catalog::{Artist, PlatformLinks};
use crate::overlay::ArtistDetail;
use crate::ranking::RankedTrack;
use crate::report::Page;
use std::io::{self, Write};

pub const EMPTY_TOP_SONGS: &str =
    r#"<div class="loading-state"><p>No tracks available yet</p></div>"#;
pub const EMPTY_ARTISTS: &str =
    r#"<div class="loading-state"><p>No artists available yet</p></div>"#;
pub const EMPTY_RELEASES: &str = r#"<p class="dim">No releases yet</p>"#;

/// Escape text for use between tags.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted attribute. URLs are otherwise trusted.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

pub fn top_songs_grid(songs: &[RankedTrack]) -> String {
    if songs.is_empty() {
        return EMPTY_TOP_SONGS.to_string();
    }

    songs
        .iter()
        .enumerate()
        .map(|(index, song)| {
            format!(
                r#"<div class="song-card">
    <div class="song-rank">#{rank}</div>
    <img src="{cover}" alt="{alt}" class="song-cover">
    <div class="song-info">
        <h3 class="song-title">{title}</h3>
        <p class="song-artist">{artist}</p>
        <div class="song-platforms">{platforms}</div>
    </div>
</div>
"#,
                rank = index + 1,
                cover = escape_attr(song.track.cover_or_placeholder()),
                alt = escape_html(&song.track.title),
                title = escape_html(&song.track.title),
                artist = escape_html(&song.artist_name),
                platforms = platform_buttons(&song.track.links),
            )
        })
        .collect()
}

pub fn artists_grid(artists: &[Artist]) -> String {
    if artists.is_empty() {
        return EMPTY_ARTISTS.to_string();
    }

    artists
        .iter()
        .map(|artist| {
            format!(
                r#"<div class="artist-card" data-artist-id="{id}" tabindex="0">
    <div class="artist-image-wrapper">
        <img src="{image}" alt="{alt}" class="artist-image">
        <div class="artist-overlay">
            <h3 class="artist-name">{name}</h3>
        </div>
    </div>
</div>
"#,
                id = escape_attr(&artist.id),
                image = escape_attr(artist.image_or_placeholder()),
                alt = escape_html(&artist.name),
                name = escape_html(&artist.name),
            )
        })
        .collect()
}

/// Overlay body for one artist.
pub fn artist_detail(detail: &ArtistDetail<'_>) -> String {
    let artist = detail.artist;

    let profile: String = artist
        .profile
        .iter()
        .map(|(platform, url)| platform_button(platform.css_class(), platform.icon(), platform.label(), url))
        .collect();

    let tracks: String = if detail.tracks.is_empty() {
        EMPTY_RELEASES.to_string()
    } else {
        detail
            .tracks
            .iter()
            .map(|track| {
                let released = track
                    .release_date
                    .as_deref()
                    .map(|d| format!(r#"<span class="modal-track-date">{}</span>"#, escape_html(d)))
                    .unwrap_or_default();
                format!(
                    r#"<div class="modal-track">
    <h4 class="modal-track-title">{title}</h4>{released}
    <div class="modal-track-platforms">{platforms}</div>
</div>
"#,
                    title = escape_html(&track.title),
                    released = released,
                    platforms = platform_buttons(&track.links),
                )
            })
            .collect()
    };

    format!(
        r#"<img src="{image}" alt="{alt}" class="modal-artist-image" id="modal-artist-image">
<h2 class="modal-artist-name" id="modal-artist-name">{name}</h2>
<div class="modal-profile">{profile}</div>
<div class="modal-tracks" id="modal-tracks">
{tracks}</div>
"#,
        image = escape_attr(artist.image_or_placeholder()),
        alt = escape_html(&artist.name),
        name = escape_html(&artist.name),
        profile = profile,
        tracks = tracks,
    )
}

fn platform_buttons(links: &PlatformLinks) -> String {
    links
        .iter()
        .map(|(platform, url)| platform_button(platform.css_class(), platform.icon(), platform.label(), url))
        .collect()
}

fn platform_button(class: &str, icon: &str, label: &str, url: &str) -> String {
    format!(
        r#"<a href="{url}" target="_blank" rel="noopener noreferrer" class="platform-btn {class}"><span>{icon}</span> {label}</a>"#,
        url = escape_attr(url),
        class = class,
        icon = icon,
        label = label,
    )
}

fn detail_templates(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| {
            format!(
                "<template id=\"artist-detail-{}\">\n{}</template>\n",
                escape_attr(&artist.id),
                artist_detail(&ArtistDetail::of(artist)),
            )
        })
        .collect()
}

pub fn write<W: Write>(writer: &mut W, page: &Page<'_>) -> io::Result<()> {
    let top_songs = top_songs_grid(&page.top_songs);
    let artists = artists_grid(&page.catalog.artists);
    let templates = detail_templates(&page.catalog.artists);
    let last_update = page
        .last_updated_text
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();

    // Write the full HTML document
    write!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Artist Hub</title>
    <style>
        :root {{
            --bg: #0b0b10;
            --card: #16161f;
            --border: #2a2a38;
            --text: #f2f2f7;
            --text-muted: #8a8a9e;
            --accent: #ff3d6e;
            --spotify: #1db954;
            --youtube: #ff0000;
            --apple: #fa57c1;
            --audiomack: #ffa200;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}

        /* Header */
        .header {{
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }}
        .logo {{
            font-size: 2.5rem;
            font-weight: 800;
            background: linear-gradient(135deg, var(--accent), #a371f7);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }}
        .last-update {{ color: var(--text-muted); font-size: 0.875rem; }}
        .section-title {{ font-size: 1.5rem; font-weight: 700; margin: 2rem 0 1rem; }}

        /* Top songs */
        .top-songs-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.5rem;
        }}
        .song-card {{
            position: relative;
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            overflow: hidden;
        }}
        .song-rank {{
            position: absolute;
            top: 0.75rem;
            left: 0.75rem;
            background: var(--accent);
            border-radius: 20px;
            padding: 0.2rem 0.75rem;
            font-weight: 700;
        }}
        .song-cover {{ width: 100%; aspect-ratio: 1; object-fit: cover; display: block; }}
        .song-info {{ padding: 1rem; }}
        .song-title {{ font-size: 1.1rem; }}
        .song-artist {{ color: var(--text-muted); margin-bottom: 0.75rem; }}

        /* Platform buttons */
        .song-platforms, .modal-track-platforms, .modal-profile {{ display: flex; flex-wrap: wrap; gap: 0.5rem; }}
        .platform-btn {{
            display: inline-flex;
            align-items: center;
            gap: 0.35rem;
            padding: 0.3rem 0.75rem;
            border-radius: 20px;
            font-size: 0.8rem;
            font-weight: 600;
            color: var(--text);
            text-decoration: none;
            background: rgba(255,255,255,0.06);
            border: 1px solid var(--border);
        }}
        .platform-btn.spotify:hover {{ border-color: var(--spotify); }}
        .platform-btn.youtube:hover {{ border-color: var(--youtube); }}
        .platform-btn.apple:hover {{ border-color: var(--apple); }}
        .platform-btn.audiomack:hover {{ border-color: var(--audiomack); }}

        /* Artists */
        .artists-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 1rem;
        }}
        .artist-card {{ cursor: pointer; border-radius: 12px; overflow: hidden; }}
        .artist-image-wrapper {{ position: relative; }}
        .artist-image {{ width: 100%; aspect-ratio: 1; object-fit: cover; display: block; transition: transform 0.2s; }}
        .artist-card:hover .artist-image {{ transform: scale(1.04); }}
        .artist-overlay {{
            position: absolute;
            inset: auto 0 0 0;
            padding: 0.75rem;
            background: linear-gradient(transparent, rgba(0,0,0,0.85));
        }}

        .loading-state {{
            grid-column: 1 / -1;
            text-align: center;
            padding: 3rem;
            color: var(--text-muted);
            background: var(--card);
            border: 1px dashed var(--border);
            border-radius: 12px;
        }}
        .dim {{ color: var(--text-muted); }}

        /* Overlay */
        .modal {{ position: fixed; inset: 0; display: none; z-index: 1000; }}
        .modal.active {{ display: flex; align-items: center; justify-content: center; }}
        .modal-backdrop {{ position: absolute; inset: 0; background: rgba(0,0,0,0.7); }}
        .modal-content {{
            position: relative;
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 16px;
            padding: 2rem;
            width: min(560px, 92vw);
            max-height: 88vh;
            overflow-y: auto;
        }}
        .modal-close {{
            position: absolute;
            top: 0.75rem;
            right: 0.75rem;
            background: none;
            border: none;
            color: var(--text-muted);
            cursor: pointer;
            font-size: 1.5rem;
        }}
        .modal-close:hover {{ color: var(--text); }}
        .modal-artist-image {{ width: 120px; height: 120px; border-radius: 50%; object-fit: cover; }}
        .modal-artist-name {{ margin: 0.75rem 0; }}
        .modal-tracks {{ margin-top: 1.5rem; display: grid; gap: 1rem; }}
        .modal-track {{ border-top: 1px solid var(--border); padding-top: 0.75rem; }}
        .modal-track-date {{ color: var(--text-muted); font-size: 0.8rem; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">Artist Hub</div>
            <div class="last-update" id="last-update">{last_update}</div>
        </div>

        <h2 class="section-title">Top Songs</h2>
        <div class="top-songs-grid" id="top-songs-grid">
{top_songs}        </div>

        <h2 class="section-title">Artists</h2>
        <div class="artists-grid" id="artists-grid">
{artists}        </div>
    </div>

    <div class="modal" id="artist-modal" role="dialog" aria-modal="true">
        <div class="modal-backdrop" id="modal-backdrop"></div>
        <div class="modal-content">
            <button class="modal-close" id="modal-close" aria-label="Close">&times;</button>
            <div id="modal-body"></div>
        </div>
    </div>

{templates}
    <script>
    const modal = document.getElementById('artist-modal');
    const modalBody = document.getElementById('modal-body');

    function showArtist(id) {{
        const tpl = document.getElementById('artist-detail-' + id);
        if (!tpl) return;
        modalBody.innerHTML = tpl.innerHTML;
        modal.classList.add('active');
        document.body.style.overflow = 'hidden';
    }}

    function closeArtist() {{
        modal.classList.remove('active');
        document.body.style.overflow = '';
    }}

    document.getElementById('artists-grid').addEventListener('click', (e) => {{
        const card = e.target.closest('.artist-card');
        if (card) showArtist(card.dataset.artistId);
    }});
    document.getElementById('modal-close').addEventListener('click', closeArtist);
    document.getElementById('modal-backdrop').addEventListener('click', closeArtist);
    document.addEventListener('keydown', (e) => {{
        if (e.key === 'Escape') closeArtist();
    }});
    </script>
</body>
</html>
"#,
        last_update = last_update,
        top_songs = top_songs,
        artists = artists,
        templates = templates,
    )?;

    Ok(())
}
