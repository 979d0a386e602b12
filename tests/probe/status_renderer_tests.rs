use sitecheck::core::probe::session::ProberSession;
use sitecheck::core::probe::types::{Classification, DisplayState, ProbeTarget, Status};
use sitecheck::core::StatusRenderer;

fn display(keyword: &str, text: &str, tooltip: &str) -> DisplayState {
    DisplayState {
        label: "example.com".to_string(),
        keyword: keyword.to_string(),
        text: text.to_string(),
        tooltip: tooltip.to_string(),
        link: "https://example.com".to_string(),
    }
}

#[test]
fn test_render_online() {
    let renderer = StatusRenderer::new();
    assert_eq!(
        renderer.render(&display("online", "Online", "HTTP 200")),
        "🟢 example.com Online (HTTP 200)"
    );
}

#[test]
fn test_render_checking_without_tooltip() {
    let renderer = StatusRenderer::new();
    assert_eq!(
        renderer.render(&display("checking", "Checking...", "")),
        "⚪ example.com Checking..."
    );
}

#[test]
fn test_render_without_label() {
    let renderer = StatusRenderer::new();
    let mut state = display("error", "Error", "URL parameter is required");
    state.label.clear();

    assert_eq!(renderer.render(&state), "🟡 Error (URL parameter is required)");
}

#[test]
fn test_emoji_per_status() {
    assert_eq!(StatusRenderer::emoji(Status::Online), "🟢");
    assert_eq!(StatusRenderer::emoji(Status::Offline), "🔴");
    assert_eq!(StatusRenderer::emoji(Status::Checking), "⚪");
    assert_eq!(StatusRenderer::emoji(Status::Error), "🟡");
}

#[test]
fn test_render_session_display() {
    let mut session = ProberSession::new(ProbeTarget::new("https://example.com").with_label("Shop"));
    session.apply(Classification::new(Status::Offline, "Error (503)"));

    assert_eq!(
        StatusRenderer::new().render(&session.display()),
        "🔴 Shop Offline (Error (503))"
    );
}

#[test]
fn test_render_json() {
    let json = StatusRenderer::new().render_json(&display("offline", "Offline", "Redirect (302)"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["keyword"], "offline");
    assert_eq!(value["tooltip"], "Redirect (302)");
    assert_eq!(value["link"], "https://example.com");
}
