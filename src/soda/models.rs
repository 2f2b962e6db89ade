use serde::Serialize;
use serde_json::{Map, Value};

use super::navigate::lookup;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration_ms: u64,
    /// Direct audio stream URL.
    pub audio_url: String,
    pub share_url: String,
    pub lyric: String,
}

impl Song {
    /// Build a summary from the track page (`loaderData.track_page`).
    ///
    /// The album lives next to the record under `trackInfo`, not inside it.
    pub fn from_track_page(
        track_page: &Value,
        record: &Map<String, Value>,
        share_url: &str,
    ) -> Self {
        let text = |key: &str| {
            record
                .get(key)
                .map(value_to_string)
                .unwrap_or_default()
        };

        let album = lookup(track_page, &["trackInfo", "album", "name"])
            .map(value_to_string)
            .unwrap_or_default();

        // `duration` is in seconds, possibly fractional, sometimes a string.
        let duration_ms = record
            .get("duration")
            .and_then(|d| match d {
                Value::String(s) => s.trim().parse::<f64>().ok(),
                other => other.as_f64(),
            })
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| (d * 1000.0) as u64)
            .unwrap_or(0);

        Self {
            id: text("track_id"),
            name: text("trackName"),
            artist: text("artistName"),
            album,
            duration_ms,
            audio_url: text("url"),
            share_url: share_url.to_string(),
            lyric: lyric_lines(record).join("\n"),
        }
    }
}

/// Non-empty `lyrics.sentences[].text` values, in order.
pub fn lyric_lines(record: &Map<String, Value>) -> Vec<String> {
    record
        .get("lyrics")
        .and_then(|l| l.get("sentences"))
        .and_then(Value::as_array)
        .map(|sentences| {
            sentences
                .iter()
                .filter_map(|s| s.get("text").and_then(Value::as_str))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
