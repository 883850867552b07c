// src/normalize/mod.rs
//! Raw scrape → typed records.
//!
//! Policy: partial markup is the normal case. A missing or malformed field gets
//! its default and a warning; a track without a location is dropped; only an
//! empty result aborts (`NoTracksProduced`).

pub mod duration;
pub mod filename;
pub mod header;

use crate::core::sanitize::{clean_text, non_empty, normalize_ws};
use crate::diag::Diagnostics;
use crate::error::{PlaylistError, Result};
use crate::format::PlaylistFormat;
use crate::model::{AlbumInfo, PlaylistDocument, RawAlbum, RawPage, RawTrack, TrackRecord};

pub use duration::{parse_duration, parse_duration_secs};
pub use filename::suggested_filename;
pub use header::{parse_header, HeaderParts};

/// Album-level fields. Structured values short-circuit header heuristics.
pub fn normalize_album(raw: &RawAlbum, diags: &mut Diagnostics) -> AlbumInfo {
    let s_artist = clean_text(raw.structured_artist.as_deref());
    let s_title = clean_text(raw.structured_title.as_deref());
    let s_year = match raw.structured_year.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            let y = header::year_prefix(v);
            if y.is_none() {
                diag_warn!(diags, "[Album Info] Structured date \"{v}\" has no 4-digit year prefix; ignored");
            }
            y
        }
        None => None,
    };

    let image_url = non_empty(raw.image_url.as_deref());
    if image_url.is_none() {
        diag_warn!(diags, "[Album Image] Album image URL not found");
    }

    let header = raw.header.as_deref().map(normalize_ws);
    let parts = match (s_title, header) {
        (Some(title), _) => HeaderParts { artist: s_artist, title: Some(title), year: s_year },
        (None, None) => {
            diag_warn!(diags, "Album header not found. Cannot suggest filename or populate album tag.");
            HeaderParts { artist: s_artist, title: None, year: s_year }
        }
        (None, Some(h)) if h.is_empty() => {
            diag_warn!(diags, "[Album Info] Album header is empty; using defaults");
            HeaderParts { artist: s_artist, title: None, year: s_year }
        }
        (None, Some(h)) if s_artist.is_some() || s_year.is_some() => {
            header::title_from_known(&h, s_artist.as_deref(), s_year.as_deref(), diags)
        }
        (None, Some(h)) => parse_header(&h, diags),
    };

    AlbumInfo {
        artist: parts.artist,
        title: parts.title,
        year: parts.year,
        image_url,
        is_album_collection: raw.is_album_collection,
    }
}

/// One track. `None` when it has no location (the record is dropped).
pub fn normalize_track(
    index: usize,
    raw: &RawTrack,
    album: &AlbumInfo,
    diags: &mut Diagnostics,
) -> Option<TrackRecord> {
    let Some(location) = clean_text(raw.location.as_deref()) else {
        diag_warn!(diags, "[Item Index {index}] No track location; item skipped");
        return None;
    };

    let duration_ms = match (raw.duration_secs, raw.duration.as_deref()) {
        (Some(secs), _) => secs.checked_mul(1000),
        (None, Some(text)) => {
            let ms = parse_duration(text);
            if ms.is_none() {
                diag_warn!(diags, "[Item Index {index}] Unexpected duration format \"{}\" (expected MM:SS); <duration> omitted", text.trim());
            }
            ms
        }
        (None, None) => {
            diag_warn!(diags, "[Item Index {index}] Duration not found; <duration> omitted");
            None
        }
    };

    let artist = clean_text(raw.artist.as_deref());
    let title = clean_text(raw.title.as_deref());
    if artist.is_none() || title.is_none() {
        diag_warn!(
            diags,
            "[Item Index {index}] Missing {}",
            match (artist.is_none(), title.is_none()) {
                (true, true) => "artist and track title",
                (true, false) => "artist",
                _ => "track title",
            }
        );
    }

    let track_number = match raw.track_number.as_deref() {
        Some(text) => {
            let n = clean_text(Some(text));
            if n.is_none() {
                diag_warn!(diags, "[Item Index {index}] Track position is empty; <trackNum> omitted");
            }
            n
        }
        None => {
            diag_warn!(diags, "[Item Index {index}] Track position not found; <trackNum> omitted");
            None
        }
    };

    Some(TrackRecord {
        location,
        title,
        artist,
        duration_ms,
        track_number,
        album: album.title.clone(),
    })
}

/// Whole page → document, preserving scrape order.
pub fn build_document(
    page: &RawPage,
    format: PlaylistFormat,
    diags: &mut Diagnostics,
) -> Result<PlaylistDocument> {
    let album = normalize_album(&page.album, diags);

    let tracks: Vec<TrackRecord> = page
        .tracks
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| normalize_track(i, raw, &album, diags))
        .collect();

    if tracks.is_empty() {
        diag_error!(diags, "No valid tracks created ({} items found). Verify the page structure.", page.tracks.len());
        return Err(PlaylistError::NoTracksProduced { raw: page.tracks.len() });
    }

    let dropped = page.tracks.len() - tracks.len();
    if dropped > 0 {
        diag_info!(diags, "{dropped} item(s) dropped for lack of a location");
    }

    // An empty header element still counts: only a missing one gives "playlist.<ext>".
    let has_header = page.album.header.is_some() || non_empty(page.album.structured_title.as_deref()).is_some();
    let suggested_filename = suggested_filename(&album, has_header, page.naming, format);
    diag_info!(diags, "Formatted {} playlist with {} tracks as \"{suggested_filename}\"", format, tracks.len());

    Ok(PlaylistDocument {
        source_page_url: s!(page.source_url.trim()),
        tracks,
        album,
        suggested_filename,
    })
}
