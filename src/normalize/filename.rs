// src/normalize/filename.rs
use crate::config::consts::DEFAULT_FILE_STEM;
use crate::core::sanitize::sanitize_filename;
use crate::format::PlaylistFormat;
use crate::model::{AlbumInfo, NamingRule, UNKNOWN_PLAYLIST};

/// Suggested download name for a document.
///
/// `has_header` is false when the page had no album header at all; catalog pages
/// then get the fixed "playlist.<ext>".
pub fn suggested_filename(
    album: &AlbumInfo,
    has_header: bool,
    naming: NamingRule,
    format: PlaylistFormat,
) -> String {
    let ext = format.ext();
    let raw = match naming {
        NamingRule::ArtistYearTitle if !has_header => format!("{DEFAULT_FILE_STEM}.{ext}"),
        NamingRule::ArtistYearTitle => format!(
            "{} ({}) - {}.{ext}",
            album.artist_or_default(),
            album.year_or_default(),
            album.title_or_default(),
        ),
        NamingRule::TaggedTitle(tag) => format!(
            "{} [{tag}].{ext}",
            album.title.as_deref().unwrap_or(UNKNOWN_PLAYLIST),
        ),
    };
    sanitize_filename(&raw)
}
