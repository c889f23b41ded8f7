//! Track catalog: the static playlist the widget is started with.

pub mod models;

pub use models::Track;

use crate::error::CatalogError;
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

static BUNDLED_CATALOG: Lazy<Vec<Track>> = Lazy::new(|| {
    parse_catalog(BUNDLED_CATALOG_JSON).unwrap_or_else(|err| {
        warn!("bundled catalog rejected: {err}");
        Vec::new()
    })
});

/// Parse a JSON array of tracks, rejecting empty catalogs and tracks without media.
pub fn parse_catalog(json: &str) -> Result<Vec<Track>, CatalogError> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    if tracks.is_empty() {
        return Err(CatalogError::Empty);
    }
    if let Some(track) = tracks.iter().find(|t| t.file.trim().is_empty()) {
        return Err(CatalogError::MissingMedia {
            name: track.name.clone(),
        });
    }
    Ok(tracks)
}

/// The catalog compiled into the binary. Empty if it failed to parse.
pub fn bundled_catalog() -> &'static [Track] {
    &BUNDLED_CATALOG
}
