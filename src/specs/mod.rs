// src/specs/mod.rs
//! # Source “specs” module
//!
//! Each spec knows **where the ground truth lives** for one kind of source and
//! turns it into a [`RawPage`](crate::model::RawPage): raw strings, all optional,
//! in scrape order.
//!
//! ## What lives here
//! - **Catalog album/collection pages** (`catalog`): fixed CSS selectors over the
//!   page HTML, structured microdata first, header text second.
//! - **Invidious playlist API** (`invidious`): JSON → raw tracks.
//!
//! ## What does **not** live here
//! - Defaults, validation, duration parsing, filenames → `normalize`.
//! - XSPF / M3U text → `format`.
//! - Writing files → `file` / `runner`.
//!
//! ## Conventions
//! - Never fail on partial markup. Missing pieces are left `None` and noted in
//!   the run's `Diagnostics`; the normalizer decides what that means.
//! - URLs are resolved to absolute form here, against the page URL.

pub mod catalog;
pub mod invidious;
