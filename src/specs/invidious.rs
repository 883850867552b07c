// src/specs/invidious.rs
//! Scraping *spec* for a YouTube playlist, read through an Invidious instance.
//!
//! `GET {instance}/api/v1/playlists/{id}` →
//! `{ title, videos: [{ videoId, index, title, author, lengthSeconds }] }`
//!
//! Mapping per video:
//! - location     = `https://www.youtube.com/watch?v={videoId}` (no id → dropped later)
//! - duration     = `lengthSeconds` (exact, skips MM:SS parsing)
//! - track number = `index + 1`
//! - artist/title = `author` / `title`
//!
//! The playlist title becomes the album title and drives the filename:
//! `"{title} [Youtube].{ext}"`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::config::consts::{YOUTUBE_PLAYLIST_PREFIX, YOUTUBE_TAG, YOUTUBE_WATCH_PREFIX};
use crate::core::net;
use crate::core::sanitize::non_empty;
use crate::diag::Diagnostics;
use crate::error::{PlaylistError, Result};
use crate::model::{NamingRule, RawAlbum, RawPage, RawTrack};

static LIST_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]list=([A-Za-z0-9_-]+)").unwrap());
static BARE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvidiousPlaylist {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub playlist_id: Option<String>,
    #[serde(default)]
    pub videos: Vec<InvidiousVideo>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvidiousVideo {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub length_seconds: Option<u64>,
}

/// Playlist id from a YouTube URL (`?list=` / `&list=`) or a bare id.
pub fn playlist_id_from_url(input: &str) -> Option<String> {
    let input = input.trim();
    if let Some(id) = LIST_PARAM.captures(input).and_then(|c| c.get(1)) {
        return Some(s!(id.as_str()));
    }
    BARE_ID.is_match(input).then(|| s!(input))
}

pub fn api_url(instance: &str, playlist_id: &str) -> String {
    format!("{}/api/v1/playlists/{}", instance.trim().trim_end_matches('/'), playlist_id)
}

/// Decode a saved or fetched API response.
pub fn parse_playlist_json(text: &str, origin: &str) -> Result<InvidiousPlaylist> {
    serde_json::from_str(text).map_err(|e| PlaylistError::upstream(origin, format!("malformed JSON: {e}")))
}

/// Blocking fetch. Non-2xx, transport errors and bad JSON are all `Upstream`.
pub fn fetch_playlist(instance: &str, playlist_id: &str) -> Result<InvidiousPlaylist> {
    let url = api_url(instance, playlist_id);
    tracing::info!("Fetching playlist {playlist_id} from {url}");
    net::get_json(&url)
}

fn video_to_raw(index: usize, v: &InvidiousVideo, diags: &mut Diagnostics) -> RawTrack {
    let location = non_empty(v.video_id.as_deref()).map(|id| join!(YOUTUBE_WATCH_PREFIX, &id));
    if location.is_none() {
        diag_warn!(diags, "[Item Index {index}] Video has no videoId");
    }

    RawTrack {
        location,
        duration: None,
        duration_secs: v.length_seconds,
        artist: v.author.clone(),
        title: v.title.clone(),
        track_number: v.index.and_then(|i| i.checked_add(1)).map(|n| n.to_string()),
    }
}

/// API payload → raw page.
pub fn to_raw_page(playlist: &InvidiousPlaylist, playlist_id: &str, diags: &mut Diagnostics) -> RawPage {
    if playlist.videos.is_empty() {
        diag_warn!(diags, "No videos found in playlist {playlist_id}");
    }
    let id = non_empty(playlist.playlist_id.as_deref()).unwrap_or_else(|| s!(playlist_id));

    RawPage {
        source_url: join!(YOUTUBE_PLAYLIST_PREFIX, &id),
        tracks: playlist.videos.iter().enumerate().map(|(i, v)| video_to_raw(i, v, diags)).collect(),
        album: RawAlbum {
            structured_title: playlist.title.clone(),
            ..Default::default()
        },
        naming: NamingRule::TaggedTitle(YOUTUBE_TAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;
    use crate::format::{m3u, xspf, PlaylistFormat};
    use crate::normalize::build_document;

    const SAMPLE: &str = r#"{
        "type": "playlist",
        "title": "Synthwave: Essentials",
        "playlistId": "PLcCUOL3_Hly8RNuTy8lw1CV3wTKdKJuTU",
        "author": "someone",
        "videoCount": 3,
        "videos": [
            {"title": "Nightcall", "videoId": "MV_3Dpw-BRY", "author": "Kavinsky", "index": 0, "lengthSeconds": 258},
            {"title": "Deleted video", "author": "", "index": 1, "lengthSeconds": 0},
            {"title": "Turbo Killer", "videoId": "zhXBRnKlOnA", "author": "Carpenter Brut", "index": 2}
        ]
    }"#;

    #[test]
    fn playlist_id_from_various_urls() {
        let id = "PLcCUOL3_Hly8RNuTy8lw1CV3wTKdKJuTU";
        assert_eq!(playlist_id_from_url(&format!("https://www.youtube.com/playlist?list={id}")).as_deref(), Some(id));
        assert_eq!(playlist_id_from_url(&format!("https://m.youtube.com/watch?v=abc&list={id}&t=3")).as_deref(), Some(id));
        assert_eq!(playlist_id_from_url(id).as_deref(), Some(id));
        assert_eq!(playlist_id_from_url("https://www.youtube.com/watch?v=abc"), None);
    }

    #[test]
    fn api_url_trims_trailing_slash() {
        assert_eq!(api_url("https://inv.example/", "PL1"), "https://inv.example/api/v1/playlists/PL1");
    }

    #[test]
    fn maps_videos_to_records() {
        let pl = parse_playlist_json(SAMPLE, "sample").unwrap();
        let mut d = Diagnostics::new();
        let raw = to_raw_page(&pl, "ignored", &mut d);
        assert_eq!(raw.source_url, "https://www.youtube.com/playlist?list=PLcCUOL3_Hly8RNuTy8lw1CV3wTKdKJuTU");
        assert_eq!(raw.tracks.len(), 3);

        let doc = build_document(&raw, PlaylistFormat::Xspf, &mut d).unwrap();
        // the video without an id is dropped, order kept
        assert_eq!(doc.tracks.len(), 2);
        let t0 = &doc.tracks[0];
        assert_eq!(t0.location, "https://www.youtube.com/watch?v=MV_3Dpw-BRY");
        assert_eq!(t0.duration_ms, Some(258_000));
        assert_eq!(t0.track_number.as_deref(), Some("1"));
        assert_eq!(t0.artist.as_deref(), Some("Kavinsky"));
        assert_eq!(doc.tracks[1].track_number.as_deref(), Some("3"));
        assert_eq!(doc.tracks[1].duration_ms, None);
        assert_eq!(doc.suggested_filename, "Synthwave_ Essentials [Youtube].xspf");

        let x = xspf::render(&doc);
        assert!(x.contains("<duration>258000</duration>"));
        assert!(x.contains("<album>Synthwave: Essentials</album>"));
        let m = m3u::render(&doc);
        assert!(m.contains("#EXTINF:258,Kavinsky - Nightcall\nhttps://www.youtube.com/watch?v=MV_3Dpw-BRY"));
        assert!(m.contains("#EXTINF:-1,Carpenter Brut - Turbo Killer"));
    }

    #[test]
    fn multi_line_title_stays_one_m3u_entry() {
        let json = r##"{"title": "T", "videos": [
            {"videoId": "abc", "index": 0, "author": "A", "lengthSeconds": 5,
             "title": "Line one\n#EXTINF:1,Injected\nhttps://evil.example/x"}
        ]}"##;
        let pl = parse_playlist_json(json, "sample").unwrap();
        let mut d = Diagnostics::new();
        let doc = build_document(&to_raw_page(&pl, "PL1", &mut d), PlaylistFormat::M3u, &mut d).unwrap();
        let m = m3u::render(&doc);
        assert_eq!(m.lines().filter(|l| l.starts_with("#EXTINF")).count(), 1);
        assert_eq!(m.lines().count(), 3);
        assert_eq!(
            m,
            "#EXTM3U\n#EXTINF:5,A - Line one #EXTINF:1,Injected https://evil.example/x\nhttps://www.youtube.com/watch?v=abc"
        );
    }

    #[test]
    fn empty_playlist_produces_no_tracks() {
        let pl = parse_playlist_json(r#"{"title": "Empty", "videos": []}"#, "sample").unwrap();
        let mut d = Diagnostics::new();
        let raw = to_raw_page(&pl, "PL0", &mut d);
        assert!(matches!(
            build_document(&raw, PlaylistFormat::Xspf, &mut d),
            Err(PlaylistError::NoTracksProduced { raw: 0 })
        ));
    }

    #[test]
    fn malformed_json_is_upstream_failure() {
        match parse_playlist_json("<html>rate limited</html>", "https://inv.example/api/v1/playlists/PL1") {
            Err(PlaylistError::Upstream { url, reason }) => {
                assert!(url.contains("PL1"));
                assert!(reason.contains("malformed JSON"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
