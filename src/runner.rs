// src/runner.rs
use std::fs;
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, Source},
    core::{net, sanitize::non_empty},
    diag::Diagnostics,
    error::{PlaylistError, Result},
    file::{dedupe_path, resolve_out_path, write_document},
    format::PlaylistFormat,
    model::{PlaylistDocument, RawPage},
    normalize::build_document,
    specs::{catalog, invidious},
};

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// `None` when the document went to stdout
    pub path: Option<PathBuf>,
    pub suggested_filename: String,
    pub document: String,
    pub track_count: usize,
}

/// The core contract: raw page in, `(document text, suggested filename)` out.
pub fn render_page(
    page: &RawPage,
    format: PlaylistFormat,
    diags: &mut Diagnostics,
) -> Result<(String, PlaylistDocument)> {
    let doc = build_document(page, format, diags)?;
    Ok((format.render(&doc), doc))
}

fn require_playlist_id(input: &str) -> Result<String> {
    invidious::playlist_id_from_url(input)
        .ok_or_else(|| PlaylistError::InvalidInput(format!("No playlist ID found in \"{input}\"")))
}

/// Resolve the configured source to a raw page. Only this step touches the network.
pub fn load_raw_page(source: &Source, diags: &mut Diagnostics) -> Result<RawPage> {
    match source {
        Source::HtmlFile { path, page_url } => {
            let html = fs::read_to_string(path)?;
            Ok(catalog::parse_page(&html, page_url, diags))
        }
        Source::PageUrl(url) => {
            let html = net::get_text(url)?;
            Ok(catalog::parse_page(&html, url, diags))
        }
        Source::Invidious { playlist, instance } => {
            let id = require_playlist_id(playlist)?;
            let pl = invidious::fetch_playlist(instance, &id)?;
            Ok(invidious::to_raw_page(&pl, &id, diags))
        }
        Source::InvidiousJson { path, playlist } => {
            let text = fs::read_to_string(path)?;
            let pl = invidious::parse_playlist_json(&text, &path.to_string_lossy())?;
            let id = invidious::playlist_id_from_url(playlist)
                .or_else(|| non_empty(pl.playlist_id.as_deref()))
                .ok_or_else(|| PlaylistError::InvalidInput(s!("No playlist ID given or found in the JSON")))?;
            Ok(invidious::to_raw_page(&pl, &id, diags))
        }
    }
}

/// Top-level runner: load → normalize → render → write.
/// Diagnostics accumulate in `diags` whether or not the run succeeds.
pub fn run(opts: &AppOptions, diags: &mut Diagnostics) -> Result<RunSummary> {
    let page = load_raw_page(&opts.source, diags)?;
    let (document, doc) = render_page(&page, opts.export.format, diags)?;

    let path = if opts.export.stdout {
        None
    } else {
        let mut path = resolve_out_path(opts.export.out.as_deref(), &doc.suggested_filename)?;
        if opts.export.no_clobber {
            path = dedupe_path(&path);
        }
        write_document(&path, &document)?;
        Some(path)
    };

    Ok(RunSummary {
        path,
        suggested_filename: doc.suggested_filename,
        document,
        track_count: doc.tracks.len(),
    })
}
