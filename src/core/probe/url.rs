//! URL utilities for reachability probing
//!
//! - Target validation (absolute http/https only)
//! - Beacon URL construction: scheme://host[:port]/favicon.ico
//! - Label derivation from the target host

use url::Url;

/// Well-known image resource used by the beacon fallback
pub const BEACON_PATH: &str = "/favicon.ico";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Invalid URL format: {0}")]
    ParseError(#[from] url::ParseError),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Missing host in URL")]
    MissingHost,
}

/// Parse and validate a probe target URL
///
/// # Returns
/// * `Ok(Url)` - absolute http(s) URL with a host
/// * `Err(UrlError)` - relative, non-http(s) or host-less input
pub fn parse_target_url(raw: &str) -> Result<Url, UrlError> {
    let url = Url::parse(raw.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Build the beacon URL on the target's origin
///
/// # Examples
/// - `https://example.com/docs/page` → `https://example.com/favicon.ico`
/// - `http://localhost:3000/app` → `http://localhost:3000/favicon.ico`
/// - `https://example.com:443/` → `https://example.com/favicon.ico`
pub fn build_beacon_url(target_url: &str) -> Result<String, UrlError> {
    let url = parse_target_url(target_url)?;
    let host = url.host_str().ok_or(UrlError::MissingHost)?;

    let mut beacon = format!("{}://{}", url.scheme(), host);

    // Url::port() is None for the scheme's default port
    if let Some(port) = url.port() {
        beacon.push_str(&format!(":{}", port));
    }

    beacon.push_str(BEACON_PATH);
    Ok(beacon)
}

/// Derive a badge label from a URL
///
/// Host name when the URL parses, the raw input otherwise, empty for empty input.
pub fn derive_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    Url::parse(trimmed)
        .ok()
        .and_then(|url| url.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| trimmed.to_string())
}
