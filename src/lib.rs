// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod diag;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod specs;

pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
mod log;

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{PlaylistError, Result};
pub use format::PlaylistFormat;
pub use model::{AlbumInfo, PlaylistDocument, RawAlbum, RawPage, RawTrack, TrackRecord};
