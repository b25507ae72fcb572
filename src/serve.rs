//! HTTP server for previewing the page
//!
//! `artisthub serve` → loads the catalog per page view, serves the page and
//! a few JSON endpoints, opens the browser.

use crate::catalog::Catalog;
use crate::loader::{self, CatalogSource, Origin};
use crate::overlay::Overlay;
use crate::ranking::{self, TOP_SONGS_COUNT};
use crate::report::{html, Page};
use serde::{Deserialize, Serialize};
use std::io;
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, data: None, error: Some(message.into()) }
    }
}

#[derive(Deserialize, Debug)]
struct TopSongsParams {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize { TOP_SONGS_COUNT }

/// A response ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn html(body: String) -> Self {
        Self { status: 200, content_type: "text/html; charset=utf-8", body }
    }

    fn json(body: String) -> Self {
        Self { status: 200, content_type: "application/json", body }
    }

    fn not_found() -> Self {
        Self { status: 404, content_type: "text/plain", body: "Not found".to_string() }
    }

    fn method_not_allowed() -> Self {
        Self { status: 405, content_type: "text/plain", body: "Method not allowed".to_string() }
    }
}

/// Start server, open browser, serve the page
pub fn start(port: u16, source: CatalogSource) -> io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let url = format!("http://localhost:{}", port);

    eprintln!("\n\x1b[1;35m♫ Artist Hub\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Catalog: {}\n", source);

    // Open browser
    let _ = open::that(&url);

    // Handle requests
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &source) {
            log::error!("failed to respond: {}", e);
        }
    }

    Ok(())
}

fn handle_request(request: Request, source: &CatalogSource) -> io::Result<()> {
    let url = request.url().to_string();
    log::info!("{} {}", request.method(), url);

    let reply = route(request.method(), &url, source);
    let header = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "invalid content type"))?;

    let response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header);
    request.respond(response)
}

/// Map a request line to a reply. The catalog is loaded once per request.
pub fn route(method: &Method, url: &str, source: &CatalogSource) -> Reply {
    let mut parts = url.splitn(2, '?');
    let path = parts.next().unwrap_or("/");
    let query = parts.next().unwrap_or("");

    if *method != Method::Get {
        return Reply::method_not_allowed();
    }

    match path {
        "/" | "/index.html" => {
            let loaded = loader::load(source);
            if loaded.origin == Origin::Fallback {
                log::info!("serving page from fallback catalog");
            }
            render_page(&loaded.catalog)
        }

        "/data/cache.json" => {
            let loaded = loader::load(source);
            json_reply(&loaded.catalog)
        }

        "/api/top-songs" => {
            let params = serde_urlencoded::from_str::<TopSongsParams>(query)
                .unwrap_or(TopSongsParams { limit: default_limit() });
            let loaded = loader::load(source);
            json_reply(&ApiResponse::success(ranking::rank_top(&loaded.catalog, params.limit)))
        }

        _ => match path.strip_prefix("/api/artists/") {
            Some(segment) if !segment.is_empty() => {
                let id = match percent_decode(segment) {
                    Some(id) => id,
                    None => return Reply::not_found(),
                };
                let loaded = loader::load(source);
                let mut overlay = Overlay::new();
                match overlay.select(&loaded.catalog.artists, &id) {
                    Some(detail) => Reply::html(html::artist_detail(&detail)),
                    None => Reply::not_found(),
                }
            }
            _ => Reply::not_found(),
        },
    }
}

/// Decode `%XX` escapes in a path segment. `None` for a bad escape or
/// non-UTF-8 result.
fn percent_decode(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn render_page(catalog: &Catalog) -> Reply {
    let page = Page::build(catalog, chrono::Utc::now());
    let mut buf = Vec::new();
    match html::write(&mut buf, &page) {
        Ok(()) => Reply::html(String::from_utf8_lossy(&buf).into_owned()),
        Err(e) => Reply {
            status: 500,
            content_type: "text/plain",
            body: e.to_string(),
        },
    }
}

fn json_reply<T: Serialize>(value: &T) -> Reply {
    match serde_json::to_string(value) {
        Ok(json) => Reply::json(json),
        Err(e) => {
            log::error!("failed to serialize response: {}", e);
            json_error(500, &e.to_string())
        }
    }
}

fn json_error(status: u16, message: &str) -> Reply {
    let body = serde_json::to_string(&ApiResponse::<()>::failure(message))
        .unwrap_or_else(|_| r#"{"ok":false,"data":null,"error":"internal error"}"#.to_string());
    Reply { status, content_type: "application/json", body }
}
