// src/error.rs
use thiserror::Error;

/// Fatal conditions. Everything else degrades to a default plus a diagnostic.
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Zero usable track records after normalization.
    #[error("no valid tracks produced ({raw} raw entries, all dropped)")]
    NoTracksProduced { raw: usize },

    /// Third-party API / page fetch failed or returned something unusable.
    #[error("upstream failure for {url}: {reason}")]
    Upstream { url: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlaylistError {
    pub fn upstream(url: impl Into<String>, reason: impl ToString) -> Self {
        PlaylistError::Upstream { url: url.into(), reason: reason.to_string() }
    }
}

pub type Result<T, E = PlaylistError> = std::result::Result<T, E>;
