// src/core/net.rs
// Blocking HTTP GET (ureq). One request per call, no retries.

use serde::de::DeserializeOwned;

use crate::config::consts::USER_AGENT;
use crate::error::{PlaylistError, Result};

fn get(url: &str) -> Result<ureq::http::Response<ureq::Body>> {
    tracing::debug!("GET {url}");
    let resp = ureq::get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(code) => PlaylistError::upstream(url, format!("HTTP status {code}")),
            other => PlaylistError::upstream(url, other),
        })?;

    if !resp.status().is_success() {
        return Err(PlaylistError::upstream(url, format!("HTTP status {}", resp.status())));
    }
    Ok(resp)
}

/// Fetch a page body as text.
pub fn get_text(url: &str) -> Result<String> {
    let mut resp = get(url)?;
    resp.body_mut()
        .read_to_string()
        .map_err(|e| PlaylistError::upstream(url, format!("read body: {e}")))
}

/// Fetch and decode a JSON body.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let body = get_text(url)?;
    serde_json::from_str(&body).map_err(|e| PlaylistError::upstream(url, format!("malformed JSON: {e}")))
}
