// src/specs/catalog.rs
//! Scraping *spec* for catalog album / collection pages.
//!
//! Page shape (one `div.playlist__item` per track):
//! ```text
//! header.content__title h1            "Artist - Title (Year)"
//! img.album-img[src]                  cover
//! ul.album-info                       present only on album pages
//! [itemprop=byArtist] / [itemprop=datePublished]   microdata, when present
//! div.playlist
//!   div.playlist__item
//!     div.playlist__position          "1"
//!     div.playlist__details div.playlist__heading a, a   artist, track
//!     div.track__details span.text-muted                 "03:45"
//!     div.playlist__actions a[href]                      track URL
//! ```
//! The same markup backs both the XSPF and the M3U exports; the output format is
//! picked later.

use scraper::{ElementRef, Html, Selector};

use crate::core::href::resolve_href;
use crate::core::sanitize::normalize_ws;
use crate::diag::Diagnostics;
use crate::model::{NamingRule, RawAlbum, RawPage, RawTrack};

pub const ACTION_LINK: &str = "div.playlist div.playlist__item div.playlist__actions a";
pub const HEADING_LINKS: &str = "div.playlist__details div.playlist__heading a";
pub const DURATION: &str = "div.track__details:not(.track__rating) span.text-muted";
pub const POSITION: &str = "div.playlist__position";
pub const ALBUM_HEADER: &str = "header.content__title h1";
pub const ALBUM_IMAGE: &str = "img.album-img";
pub const ALBUM_INFO: &str = "ul.album-info";
pub const ITEM_CLASS: &str = "playlist__item";

const BY_ARTIST: &str = r#"[itemprop="byArtist"]"#;
const ITEMPROP_NAME: &str = r#"[itemprop="name"]"#;
const DATE_PUBLISHED: &str = r#"[itemprop="datePublished"]"#;
const ALBUM_INFO_ANY: &str = "ul.album-info *";

/// Selectors are compile-time constants; a parse failure is a programming error.
fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

struct Selectors {
    action_link: Selector,
    heading_links: Selector,
    duration: Selector,
    position: Selector,
    header: Selector,
    image: Selector,
    album_info: Selector,
    by_artist: Selector,
    itemprop_name: Selector,
    date_published: Selector,
    album_info_any: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            action_link: sel(ACTION_LINK),
            heading_links: sel(HEADING_LINKS),
            duration: sel(DURATION),
            position: sel(POSITION),
            header: sel(ALBUM_HEADER),
            image: sel(ALBUM_IMAGE),
            album_info: sel(ALBUM_INFO),
            by_artist: sel(BY_ARTIST),
            itemprop_name: sel(ITEMPROP_NAME),
            date_published: sel(DATE_PUBLISHED),
            album_info_any: sel(ALBUM_INFO_ANY),
        }
    }
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of)
}

/// Nearest ancestor carrying the track-item class (DOM `closest()`).
fn closest_item(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().classes().any(|c| c == ITEM_CLASS))
}

/// `content`/`datetime` attribute first, then text.
fn attr_or_text(el: ElementRef<'_>, attrs: &[&str]) -> Option<String> {
    attrs
        .iter()
        .find_map(|a| el.value().attr(a))
        .map(normalize_ws)
        .filter(|v| !v.is_empty())
        .or_else(|| Some(text_of(el)).filter(|v| !v.is_empty()))
}

fn is_four_digits(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn scrape_track(index: usize, anchor: ElementRef<'_>, page_url: &str, s: &Selectors, diags: &mut Diagnostics) -> RawTrack {
    let location = match anchor.value().attr("href") {
        Some(href) => resolve_href(page_url, href),
        None => {
            diag_warn!(diags, "[Item Index {index}] Action link has no href");
            None
        }
    };

    // Outside an item only the link is known; the normalizer fills in defaults.
    let Some(item) = closest_item(anchor) else {
        diag_warn!(diags, "[Item Index {index}] Action link is not inside a .{ITEM_CLASS}; details unavailable");
        return RawTrack { location, ..Default::default() };
    };

    let links: Vec<ElementRef<'_>> = item.select(&s.heading_links).collect();
    let (artist, title) = if links.len() >= 2 {
        (Some(text_of(links[0])), Some(text_of(links[1])))
    } else {
        diag_warn!(diags, "[Item Index {index}] Could not find the two Artist/Track links in the item's heading");
        (None, None)
    };

    RawTrack {
        location,
        duration: first_text(item, &s.duration),
        duration_secs: None,
        artist,
        title,
        track_number: first_text(item, &s.position),
    }
}

fn scrape_album(doc: &Html, page_url: &str, s: &Selectors, diags: &mut Diagnostics) -> RawAlbum {
    let root = doc.root_element();

    let is_album_collection = root.select(&s.album_info).next().is_some();
    if is_album_collection {
        diag_info!(diags, "Album page ({ALBUM_INFO} found): image goes on each track");
    } else {
        diag_info!(diags, "Not an album page ({ALBUM_INFO} missing): image goes on the playlist");
    }

    let header = first_text(root, &s.header);

    let image_url = match root.select(&s.image).next() {
        Some(img) => {
            let url = img.value().attr("src").and_then(|src| resolve_href(page_url, src));
            if url.is_none() {
                diag_warn!(diags, "[Album Image] {ALBUM_IMAGE} found, but src attribute is empty");
            }
            url
        }
        None => None,
    };

    let structured_artist = root.select(&s.by_artist).next().and_then(|el| {
        el.value()
            .attr("content")
            .map(normalize_ws)
            .filter(|v| !v.is_empty())
            .or_else(|| first_text(el, &s.itemprop_name).filter(|v| !v.is_empty()))
            .or_else(|| Some(text_of(el)).filter(|v| !v.is_empty()))
    });

    let structured_year = root
        .select(&s.date_published)
        .next()
        .and_then(|el| attr_or_text(el, &["content", "datetime"]))
        .or_else(|| {
            root.select(&s.album_info_any)
                .map(text_of)
                .find(|t| is_four_digits(t))
        });

    if structured_artist.is_some() || structured_year.is_some() {
        diag_info!(
            diags,
            "Structured album data: artist={:?}, year={:?}",
            structured_artist.as_deref(),
            structured_year.as_deref()
        );
    }

    RawAlbum {
        header,
        image_url,
        structured_artist,
        structured_year,
        structured_title: None,
        is_album_collection,
    }
}

/// Parse one catalog page. Never fails; an unrecognized page yields zero tracks.
pub fn parse_page(html: &str, page_url: &str, diags: &mut Diagnostics) -> RawPage {
    let doc = Html::parse_document(html);
    let s = Selectors::new();

    let album = scrape_album(&doc, page_url, &s, diags);

    let anchors: Vec<ElementRef<'_>> = doc.select(&s.action_link).collect();
    if anchors.is_empty() {
        diag_warn!(diags, "No action link element found with selector: {ACTION_LINK}");
    }
    let tracks = anchors
        .into_iter()
        .enumerate()
        .map(|(i, a)| scrape_track(i, a, page_url, &s, diags))
        .collect();

    RawPage {
        source_url: s!(page_url),
        tracks,
        album,
        naming: NamingRule::ArtistYearTitle,
    }
}
