// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{DEFAULT_INVIDIOUS_INSTANCE, INVIDIOUS_INSTANCE_ENV};
use crate::config::options::{AppOptions, ExportOptions, Source};
use crate::diag::{Diagnostics, Severity};
use crate::error::PlaylistError;
use crate::format::PlaylistFormat;

#[derive(Parser, Debug)]
#[command(name = "playlist_scrape", version, about = "Scrape album pages and playlist APIs into XSPF / M3U playlists")]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["html", "url", "youtube", "youtube_json"])
))]
pub struct Args {
    /// Saved album/playlist page (HTML)
    #[arg(long, value_name = "FILE", requires = "page_url", conflicts_with_all = ["url", "youtube", "youtube_json"])]
    pub html: Option<PathBuf>,

    /// URL the saved page was loaded from; resolves relative links
    #[arg(long, value_name = "URL", requires = "html")]
    pub page_url: Option<String>,

    /// Album/playlist page to fetch
    #[arg(long, value_name = "URL", conflicts_with_all = ["youtube", "youtube_json"])]
    pub url: Option<String>,

    /// YouTube playlist URL or bare playlist id
    #[arg(long, value_name = "URL|ID")]
    pub youtube: Option<String>,

    /// Saved Invidious playlist API response (JSON)
    #[arg(long, value_name = "FILE")]
    pub youtube_json: Option<PathBuf>,

    /// Invidious instance used for --youtube
    #[arg(long, value_name = "URL", env = INVIDIOUS_INSTANCE_ENV, default_value = DEFAULT_INVIDIOUS_INSTANCE)]
    pub instance: String,

    /// Output format
    #[arg(long, default_value_t = PlaylistFormat::Xspf)]
    pub format: PlaylistFormat,

    /// Output file, or directory (trailing separator) for the suggested name
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Never overwrite; pick "name (N).ext"
    #[arg(long)]
    pub no_clobber: bool,

    /// Debug-level logging (otherwise RUST_LOG or "info")
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn source(&self) -> Result<Source, PlaylistError> {
        if let Some(path) = &self.html {
            let page_url = self.page_url.clone().unwrap_or_default();
            if page_url.trim().is_empty() {
                return Err(PlaylistError::InvalidInput(s!("--html needs a non-empty --page-url")));
            }
            return Ok(Source::HtmlFile { path: path.clone(), page_url });
        }
        if let Some(url) = &self.url {
            return Ok(Source::PageUrl(url.clone()));
        }
        if let Some(path) = &self.youtube_json {
            return Ok(Source::InvidiousJson {
                path: path.clone(),
                playlist: self.youtube.clone().unwrap_or_default(),
            });
        }
        if let Some(playlist) = &self.youtube {
            return Ok(Source::Invidious { playlist: playlist.clone(), instance: self.instance.clone() });
        }
        Err(PlaylistError::InvalidInput(s!(
            "Nothing to do: pass one of --html, --url, --youtube or --youtube-json"
        )))
    }

    pub fn to_options(&self) -> Result<AppOptions, PlaylistError> {
        Ok(AppOptions {
            source: self.source()?,
            export: ExportOptions {
                format: self.format,
                out: self.out.clone(),
                stdout: self.stdout,
                no_clobber: self.no_clobber,
            },
        })
    }
}

fn report(diags: &Diagnostics) {
    if diags.is_empty() {
        return;
    }
    tracing::info!(
        "{} diagnostic(s): {} warning(s), {} error(s)",
        diags.len(),
        diags.count(Severity::Warn),
        diags.count(Severity::Error)
    );
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.to_options()?;
    let mut diags = Diagnostics::new();
    let result = crate::runner::run(&opts, &mut diags);
    report(&diags);
    let summary = result.wrap_err("No playlist written")?;

    match &summary.path {
        Some(path) => {
            tracing::info!("Wrote {} track(s) to {}", summary.track_count, path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(summary.document.as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }
    Ok(())
}
