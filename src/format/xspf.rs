// src/format/xspf.rs
use crate::core::sanitize::escape_xml;
use crate::model::{AlbumInfo, PlaylistDocument, TrackRecord};

pub const XSPF_NS: &str = "http://xspf.org/ns/0/";

/// Push `  <tag>escaped</tag>\n` at the given indent.
fn push_tag(out: &mut String, indent: &str, tag: &str, text: &str) {
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape_xml(text));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// One `<track>` block, without a trailing newline.
pub fn render_track(track: &TrackRecord, album: &AlbumInfo) -> String {
    const IND: &str = "      ";
    let mut out = s!("    <track>\n");

    push_tag(&mut out, IND, "location", &track.location);
    if let Some(ms) = track.duration_ms {
        out.push_str(&format!("{IND}<duration>{ms}</duration>\n"));
    }
    if let Some(artist) = &track.artist {
        push_tag(&mut out, IND, "creator", artist);
    }
    if let Some(title) = &track.title {
        push_tag(&mut out, IND, "title", title);
    }
    if let Some(album_title) = &track.album {
        push_tag(&mut out, IND, "album", album_title);
    }
    // Per-track cover only for album collections; otherwise it sits on the playlist.
    if album.is_album_collection {
        if let Some(img) = &album.image_url {
            push_tag(&mut out, IND, "image", img);
        }
    }
    if let Some(num) = &track.track_number {
        push_tag(&mut out, IND, "trackNum", num);
    }

    out.push_str("    </track>");
    out
}

/// Full XSPF document. No trailing newline after `</playlist>`.
pub fn render(doc: &PlaylistDocument) -> String {
    let mut out = s!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<playlist version=\"1.0\" xmlns=\"{XSPF_NS}\">\n"));

    if !doc.source_page_url.trim().is_empty() {
        push_tag(&mut out, "  ", "location", &doc.source_page_url);
    }
    if !doc.album.is_album_collection {
        if let Some(img) = &doc.album.image_url {
            push_tag(&mut out, "  ", "image", img);
        }
    }

    out.push_str("  <trackList>\n");
    let blocks: Vec<String> = doc.tracks.iter().map(|t| render_track(t, &doc.album)).collect();
    out.push_str(&blocks.join("\n"));
    out.push_str("\n  </trackList>\n");
    out.push_str("</playlist>");
    out
}
