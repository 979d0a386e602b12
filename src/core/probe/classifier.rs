// Status classification for probe outcomes
//
// Priority: configuration → HTTP status buckets → opaque → beacon → network failure.
// Bucket edges: [200,300) online, [300,400) depends on redirect policy, >= 400 offline.

use crate::core::probe::types::{Classification, Evidence, ProbeOutcome, ProbeTarget, Status};
use crate::core::probe::url::parse_target_url;

pub const REASON_MISSING_URL: &str = "URL parameter is required";
pub const REASON_INVALID_URL: &str = "URL is not a valid absolute http(s) URI";
pub const REASON_OPAQUE: &str = "verified via cross-origin probe, status unavailable";
pub const REASON_BEACON_LOADED: &str = "verified via image probe, limited accuracy";
pub const REASON_BEACON_FAILED: &str = "unable to verify due to cross-origin restriction";
pub const REASON_NETWORK_FAILURE: &str = "network error or unreachable";

/// Check the target configuration before any network attempt
///
/// Returns `Some(Error)` classification for a missing or invalid URL.
pub fn classify_config(target: &ProbeTarget) -> Option<Classification> {
    if !target.has_url() {
        return Some(Classification::new(Status::Error, REASON_MISSING_URL));
    }
    if parse_target_url(&target.url).is_err() {
        return Some(Classification::new(Status::Error, REASON_INVALID_URL));
    }
    None
}

/// Map an HTTP status code to a classification
pub fn classify_status_code(code: u16, follow_redirects: bool) -> Classification {
    match code {
        200..=299 => Classification::new(Status::Online, format!("HTTP {}", code)),
        300..=399 if follow_redirects => {
            Classification::new(Status::Online, format!("HTTP {} (redirected)", code))
        }
        300..=399 => Classification::new(Status::Offline, format!("Redirect ({})", code)),
        400..=u16::MAX => Classification::new(Status::Offline, format!("Error ({})", code)),
        _ => Classification::new(Status::Offline, format!("Unexpected status ({})", code)),
    }
}

/// Classify a probe outcome for `target`
pub fn classify(target: &ProbeTarget, outcome: &ProbeOutcome) -> Classification {
    if let Some(config_error) = classify_config(target) {
        return config_error;
    }

    match outcome.evidence {
        Evidence::Http(code) => classify_status_code(code, target.follow_redirects),
        Evidence::Opaque => Classification::new(Status::Online, REASON_OPAQUE),
        Evidence::BeaconLoaded => Classification::new(Status::Online, REASON_BEACON_LOADED),
        Evidence::BeaconFailed => Classification::new(Status::Offline, REASON_BEACON_FAILED),
        Evidence::NetworkFailure => Classification::new(Status::Offline, REASON_NETWORK_FAILURE),
    }
}
