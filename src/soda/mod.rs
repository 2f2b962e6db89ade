//! Soda Music (汽水音乐) share pages
//!
//! Share links redirect to a server-rendered track page whose client state is
//! inlined as `_ROUTER_DATA = {...};`. This module provides:
//! - an HTTP client that resolves the share link to that page
//! - extraction and decoding of the embedded blob
//! - lookups into the track record and allow-list filtering

pub mod extract;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod navigate;
pub mod output;

use anyhow::Context;
use serde_json::{Map, Value};

pub use extract::extract_router_data;
pub use fetch::SodaClient;
pub use filter::filter_fields;
pub use models::Song;

pub const NOT_FOUND_MESSAGE: &str = "lyrics data not found";

/// Decode the `_ROUTER_DATA` blob of a page. `Ok(None)` when the page has none.
pub fn parse_router_data(html: &str) -> anyhow::Result<Option<Value>> {
    let Some(blob) = extract_router_data(html) else {
        return Ok(None);
    };
    tracing::debug!("router data blob is {} bytes", blob.len());
    let doc = serde_json::from_str(blob).context("parse _ROUTER_DATA json")?;
    Ok(Some(doc))
}

/// `loaderData.track_page`
pub fn track_page(doc: &Value) -> anyhow::Result<&Value> {
    navigate::require(doc, &navigate::TRACK_RECORD_PATH[..2])
}

/// `loaderData.track_page.audioWithLyricsOption`, which must be an object.
pub fn track_record(doc: &Value) -> anyhow::Result<&Map<String, Value>> {
    let rec = navigate::require(doc, &navigate::TRACK_RECORD_PATH)?;
    match rec.as_object() {
        Some(map) => Ok(map),
        None => anyhow::bail!("audioWithLyricsOption is not an object"),
    }
}

/// The track record reduced to `fields`.
pub fn filtered_track<S: AsRef<str>>(
    doc: &Value,
    fields: &[S],
) -> anyhow::Result<Map<String, Value>> {
    let filtered = filter_fields(track_record(doc)?, fields);
    tracing::debug!("kept {} of {} fields", filtered.len(), fields.len());
    Ok(filtered)
}
