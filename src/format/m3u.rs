// src/format/m3u.rs
use crate::model::{PlaylistDocument, TrackRecord, UNKNOWN_ARTIST, UNKNOWN_TRACK};

pub const HEADER: &str = "#EXTM3U";

/// "{artist} - {track}" with per-field fallback.
pub fn display_title(track: &TrackRecord) -> String {
    match (track.artist.as_deref(), track.title.as_deref()) {
        (Some(a), Some(t)) => format!("{a} - {t}"),
        (Some(a), None) => format!("{a} - {UNKNOWN_TRACK}"),
        (None, Some(t)) => format!("{UNKNOWN_ARTIST} - {t}"),
        (None, None) => format!("{UNKNOWN_ARTIST} - {UNKNOWN_TRACK}"),
    }
}

/// Seconds for `#EXTINF`; `-1` when unknown. M3U always writes the field.
pub fn duration_secs(track: &TrackRecord) -> i64 {
    match track.duration_ms {
        Some(ms) => i64::try_from(ms / 1000).unwrap_or(i64::MAX),
        None => -1,
    }
}

/// `#EXTINF` line + URL line for one track.
pub fn render_entry(track: &TrackRecord) -> String {
    format!("#EXTINF:{},{}\n{}", duration_secs(track), display_title(track), track.location)
}

/// Full M3U document; entries newline-joined, no trailing newline.
pub fn render(doc: &PlaylistDocument) -> String {
    let mut parts = Vec::with_capacity(doc.tracks.len() + 1);
    parts.push(s!(HEADER));
    parts.extend(doc.tracks.iter().map(render_entry));
    parts.join("\n")
}
