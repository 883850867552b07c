// src/model.rs
//! Track / album records.
//!
//! Raw* types are what page adapters hand over: every field optional, untrimmed,
//! unvalidated. The normalized types use `Option` for "not found"; the display
//! defaults below are only substituted where a format needs *some* text
//! (M3U titles, filenames), never emitted as XSPF tag content.

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_TRACK: &str = "Unknown Track";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_YEAR: &str = "UnknownYear";
pub const UNKNOWN_PLAYLIST: &str = "Unknown Playlist";

/* ---------------- Raw (adapter → normalizer) ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTrack {
    pub location: Option<String>,
    /// "MM:SS" text as shown on the page
    pub duration: Option<String>,
    /// Exact length from an API; wins over `duration` text
    pub duration_secs: Option<u64>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub track_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAlbum {
    /// Free-text heading, usually "Artist - Title (Year)"
    pub header: Option<String>,
    pub image_url: Option<String>,
    pub structured_artist: Option<String>,
    /// Published date ("1979-11-30") or a bare year
    pub structured_year: Option<String>,
    /// Explicit title from an API; skips header parsing
    pub structured_title: Option<String>,
    pub is_album_collection: bool,
}

/// How the suggested filename is built for a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamingRule {
    /// "{artist} ({year}) - {title}.{ext}", or "playlist.{ext}" without a header
    #[default]
    ArtistYearTitle,
    /// "{title} [{tag}].{ext}"
    TaggedTitle(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPage {
    pub source_url: String,
    pub tracks: Vec<RawTrack>,
    pub album: RawAlbum,
    pub naming: NamingRule,
}

/* ---------------- Normalized ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRecord {
    pub location: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration_ms: Option<u64>,
    pub track_number: Option<String>,
    pub album: Option<String>,
}

impl TrackRecord {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            title: None,
            artist: None,
            duration_ms: None,
            track_number: None,
            album: None,
        }
    }

    pub fn artist_or_default(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TRACK)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumInfo {
    pub artist: Option<String>,
    pub title: Option<String>,
    /// Always four ASCII digits when present
    pub year: Option<String>,
    pub image_url: Option<String>,
    pub is_album_collection: bool,
}

impl AlbumInfo {
    pub fn artist_or_default(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_ALBUM)
    }

    pub fn year_or_default(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN_YEAR)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistDocument {
    pub source_page_url: String,
    /// Scrape order, never re-sorted
    pub tracks: Vec<TrackRecord>,
    pub album: AlbumInfo,
    pub suggested_filename: String,
}
