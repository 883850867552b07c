// src/core/sanitize.rs

/// Characters that are not allowed in suggested filenames.
pub const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trimmed, non-empty copy of an optional scraped value.
pub fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

/// Whitespace-collapsed, non-empty copy. Line breaks become spaces, so the
/// value is safe on a single-line format such as `#EXTINF`.
pub fn clean_text(s: Option<&str>) -> Option<String> {
    s.map(normalize_ws).filter(|v| !v.is_empty())
}

/// Escape text for XML character data.
/// Single pass over the input, so entities we emit are never re-escaped.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace every forbidden filename character with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
