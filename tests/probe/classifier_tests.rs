use sitecheck::core::probe::classifier::{
    classify, classify_config, classify_status_code, REASON_BEACON_FAILED, REASON_BEACON_LOADED,
    REASON_INVALID_URL, REASON_MISSING_URL, REASON_NETWORK_FAILURE, REASON_OPAQUE,
};
use sitecheck::core::probe::types::{ProbeOutcome, ProbeTarget, Status};

fn target() -> ProbeTarget {
    ProbeTarget::new("https://example.com")
}

#[test]
fn test_success_range_is_online() {
    for code in [200, 201, 204, 299] {
        let classification = classify_status_code(code, true);
        assert_eq!(classification.status, Status::Online);
        assert_eq!(classification.reason, format!("HTTP {}", code));
    }
}

#[test]
fn test_redirects_depend_on_policy() {
    let followed = classify_status_code(301, true);
    assert_eq!(followed.status, Status::Online);
    assert_eq!(followed.reason, "HTTP 301 (redirected)");

    let manual = classify_status_code(302, false);
    assert_eq!(manual.status, Status::Offline);
    assert_eq!(manual.reason, "Redirect (302)");
}

#[test]
fn test_client_and_server_errors_are_offline() {
    assert_eq!(classify_status_code(404, true).reason, "Error (404)");
    assert_eq!(classify_status_code(503, false).reason, "Error (503)");
    assert_eq!(classify_status_code(599, true).status, Status::Offline);
}

#[test]
fn test_informational_codes_are_offline() {
    let classification = classify_status_code(101, true);
    assert_eq!(classification.status, Status::Offline);
    assert_eq!(classification.reason, "Unexpected status (101)");
}

#[test]
fn test_config_errors_take_priority() {
    let outcome = ProbeOutcome::http(200, false, "HEAD 200".to_string());

    let missing = classify(&ProbeTarget::new(""), &outcome);
    assert_eq!(missing.status, Status::Error);
    assert_eq!(missing.reason, REASON_MISSING_URL);

    let invalid = classify(&ProbeTarget::new("example.com"), &outcome);
    assert_eq!(invalid.status, Status::Error);
    assert_eq!(invalid.reason, REASON_INVALID_URL);
}

#[test]
fn test_classify_config() {
    assert!(classify_config(&target()).is_none());
    assert_eq!(
        classify_config(&ProbeTarget::new("   ")).map(|c| c.reason),
        Some(REASON_MISSING_URL.to_string())
    );
    assert_eq!(
        classify_config(&ProbeTarget::new("ftp://example.com")).map(|c| c.status),
        Some(Status::Error)
    );
}

#[test]
fn test_fallback_evidence() {
    let cases = [
        (ProbeOutcome::opaque(String::new()), Status::Online, REASON_OPAQUE),
        (ProbeOutcome::beacon(true, String::new()), Status::Online, REASON_BEACON_LOADED),
        (ProbeOutcome::beacon(false, String::new()), Status::Offline, REASON_BEACON_FAILED),
        (ProbeOutcome::network_failure(String::new()), Status::Offline, REASON_NETWORK_FAILURE),
    ];

    for (outcome, status, reason) in cases {
        let classification = classify(&target(), &outcome);
        assert_eq!(classification.status, status, "Failed for {:?}", outcome.evidence);
        assert_eq!(classification.reason, reason);
    }
}

#[test]
fn test_http_outcome_uses_target_redirect_policy() {
    let outcome = ProbeOutcome::http(302, false, "HEAD 302".to_string());

    assert_eq!(classify(&target(), &outcome).status, Status::Online);
    assert_eq!(
        classify(&target().with_follow_redirects(false), &outcome).status,
        Status::Offline
    );
}
