// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::format::PlaylistFormat;

/// Where the raw page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Saved catalog page; `page_url` resolves relative links and fills `<location>`
    HtmlFile { path: PathBuf, page_url: String },
    /// Catalog page fetched over HTTP
    PageUrl(String),
    /// YouTube playlist URL or id, read through the Invidious API
    Invidious { playlist: String, instance: String },
    /// Saved Invidious API response
    InvidiousJson { path: PathBuf, playlist: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: PlaylistFormat,
    /// File or directory; `None` → suggested name in the current directory
    pub out: Option<PathBuf>,
    /// Print instead of writing a file
    pub stdout: bool,
    /// Pick "name (N).ext" instead of overwriting
    pub no_clobber: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: PlaylistFormat::Xspf,
            out: None,
            stdout: false,
            no_clobber: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: Source,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn new(source: Source) -> Self {
        Self { source, export: ExportOptions::default() }
    }

    pub fn youtube(playlist: impl Into<String>) -> Self {
        Self::new(Source::Invidious {
            playlist: playlist.into(),
            instance: s!(DEFAULT_INVIDIOUS_INSTANCE),
        })
    }
}
