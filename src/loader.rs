//! Catalog loading with fallback
//!
//! One attempt, no retry, no timeout. The fetched document is used only if
//! the transport succeeds, the response status is a success, and the body
//! parses as a catalog. Every other outcome substitutes
//! [`Catalog::fallback`]. The reason is logged but the caller only learns
//! *that* the fallback was used, never why.

use crate::catalog::{Catalog, CatalogError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where the catalog document lives when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "data/cache.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(Box<ureq::Transport>),

    #[error("unsuccessful response: HTTP {0}")]
    Status(u16),

    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] CatalogError),
}

impl From<ureq::Error> for LoadError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => LoadError::Status(code),
            ureq::Error::Transport(transport) => LoadError::Transport(Box::new(transport)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Url(url) => f.write_str(url),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Fetched,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub catalog: Catalog,
    pub origin: Origin,
}

/// Fetch and parse the document, reporting exactly what went wrong.
pub fn fetch(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let body = match source {
        CatalogSource::Url(url) => {
            let agent = ureq::AgentBuilder::new().build();
            agent.get(url).call()?.into_string()?
        }
        CatalogSource::File(path) => std::fs::read_to_string(path)?,
    };
    Ok(Catalog::parse(&body)?)
}

/// Fetch the document, or fall back to the built-in catalog on any failure.
pub fn load(source: &CatalogSource) -> Loaded {
    match fetch(source) {
        Ok(catalog) => {
            log::debug!(
                "loaded {} artists from {}",
                catalog.artists.len(),
                source
            );
            Loaded {
                catalog,
                origin: Origin::Fetched,
            }
        }
        Err(e) => {
            log::warn!("using fallback catalog, {} unavailable: {}", source, e);
            Loaded {
                catalog: Catalog::fallback(),
                origin: Origin::Fallback,
            }
        }
    }
}
