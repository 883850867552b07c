// src/normalize/header.rs
//! Album header parsing: "Artist - Title (Year)".
//!
//! Two tiers:
//! - **Structured** values (artist / published year / explicit title) win when the
//!   page provides them; the header is then only used to isolate the title.
//! - **Heuristic** split of the header text otherwise.
//!
//! Nothing here fails. Each miss leaves the field `None` and records a warning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::sanitize::non_empty;
use crate::diag::Diagnostics;

// ASCII digits only; `\d` would also accept other scripts' digits.
static TRAILING_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([0-9]{4})\)$").unwrap());

pub const SEPARATOR: &str = " - ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderParts {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
}

/// Strip a trailing "(YYYY)". Returns the trimmed remainder and the year.
pub fn split_trailing_year(text: &str) -> (String, Option<String>) {
    let text = text.trim();
    if let Some(caps) = TRAILING_YEAR.captures(text) {
        if let (Some(whole), Some(year)) = (caps.get(0), caps.get(1)) {
            return (text[..whole.start()].trim().to_string(), Some(year.as_str().to_string()));
        }
    }
    (text.to_string(), None)
}

/// Split on the *last* " - " (titles may contain the separator themselves).
/// A separator at position 0 does not count.
pub fn split_artist_title(text: &str) -> Option<(Option<String>, Option<String>)> {
    match text.rfind(SEPARATOR) {
        Some(idx) if idx > 0 => Some((
            non_empty(Some(&text[..idx])),
            non_empty(Some(&text[idx + SEPARATOR.len()..])),
        )),
        _ => None,
    }
}

/// Heuristic parse of a free-text header.
pub fn parse_header(text: &str, diags: &mut Diagnostics) -> HeaderParts {
    let (rest, year) = split_trailing_year(text);
    if year.is_none() {
        diag_warn!(diags, "[Album Info] Could not find (YYYY) year pattern at the end of \"{}\"", text.trim());
    }

    match split_artist_title(&rest) {
        Some((artist, title)) => HeaderParts { artist, title, year },
        None => {
            diag_warn!(diags, "[Album Info] Could not find \" - \" separator in \"{rest}\"");
            HeaderParts { artist: None, title: non_empty(Some(&rest)), year }
        }
    }
}

/// Year from a structured value: "1979", "1979-11-30", "1979-11-30T00:00:00Z".
/// The first four chars must be ASCII digits and must not continue as a number.
pub fn year_prefix(value: &str) -> Option<String> {
    let v = value.trim();
    let head = v.get(..4)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match v.as_bytes().get(4) {
        Some(b) if b.is_ascii_digit() => None,
        _ => Some(s!(head)),
    }
}

/// Use already-known artist/year to cut the title out of the header.
pub fn title_from_known(
    header: &str,
    artist: Option<&str>,
    year: Option<&str>,
    diags: &mut Diagnostics,
) -> HeaderParts {
    let (mut rest, header_year) = split_trailing_year(header);

    // A structured year can also appear bare in parens: "... (1979)" handled above,
    // "... 1979" is left alone (could be part of the title).
    let year = match (year, header_year) {
        (Some(y), _) => Some(s!(y)),
        (None, Some(y)) => Some(y),
        (None, None) => {
            diag_warn!(diags, "[Album Info] No structured year and no (YYYY) in \"{}\"", header.trim());
            None
        }
    };

    let Some(artist) = artist else {
        // Only the year was structured; fall back to the separator for the rest.
        return match split_artist_title(&rest) {
            Some((artist, title)) => HeaderParts { artist, title, year },
            None => {
                diag_warn!(diags, "[Album Info] Could not find \" - \" separator in \"{rest}\"");
                HeaderParts { artist: None, title: non_empty(Some(&rest)), year }
            }
        };
    };

    let prefix = join!(artist, SEPARATOR);
    if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
        rest = stripped.trim().to_string();
    } else if rest == artist {
        rest.clear();
    } else {
        diag_info!(diags, "[Album Info] Header \"{rest}\" does not start with artist \"{artist}\"; using it whole as title");
    }

    HeaderParts { artist: Some(s!(artist)), title: non_empty(Some(&rest)), year }
}
