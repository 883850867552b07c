// src/core/href.rs
// Resolve scraped href/src attributes the way a browser's `.href` would
// (WHATWG URL joining via the `url` crate: percent-encoding, lowercased scheme).

use url::Url;

/// Resolve `href` against `base`. Empty/blank `href` → `None`.
/// An unparseable base or reference leaves the trimmed `href` as-is.
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let joined = Url::parse(base.trim()).and_then(|b| b.join(href));
    Some(match joined {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::debug!("Could not resolve {href:?} against {base:?}: {e}");
            s!(href)
        }
    })
}
