// src/format/mod.rs
//! Playlist serializers.
//!
//! Both writers take a finished [`PlaylistDocument`] and return the full file
//! text. They never look at raw scrape data and never substitute defaults into
//! XSPF tags; absent fields are simply left out.

pub mod m3u;
pub mod xspf;

use std::fmt;
use std::str::FromStr;

use crate::model::PlaylistDocument;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaylistFormat {
    #[default]
    Xspf,
    M3u,
}

impl PlaylistFormat {
    pub fn ext(&self) -> &'static str {
        match self { PlaylistFormat::Xspf => "xspf", PlaylistFormat::M3u => "m3u" }
    }

    pub fn render(&self, doc: &PlaylistDocument) -> String {
        match self {
            PlaylistFormat::Xspf => xspf::render(doc),
            PlaylistFormat::M3u => m3u::render(doc),
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

impl FromStr for PlaylistFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xspf" => Ok(PlaylistFormat::Xspf),
            "m3u" | "m3u8" => Ok(PlaylistFormat::M3u),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}
