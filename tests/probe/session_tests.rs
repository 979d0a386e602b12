use sitecheck::core::probe::session::{ProberSession, SessionCallbacks, TransitionAction};
use sitecheck::core::probe::types::{ActionError, Classification, ProbeTarget, Status};
use std::sync::{Arc, Mutex};

use crate::common::EventRecorder;

fn session() -> ProberSession {
    ProberSession::new(ProbeTarget::new("https://example.com"))
}

fn online() -> Classification {
    Classification::new(Status::Online, "HTTP 200")
}

fn offline() -> Classification {
    Classification::new(Status::Offline, "Error (503)")
}

#[test]
fn test_initial_state_is_checking() {
    let session = session();
    let display = session.display();

    assert_eq!(session.status(), Status::Checking);
    assert_eq!(display.keyword, "checking");
    assert_eq!(display.text, "Checking...");
    assert_eq!(display.label, "example.com");
    assert_eq!(display.link, "https://example.com");
    assert!(display.tooltip.is_empty());
}

#[test]
fn test_apply_updates_status_and_tooltip() {
    let mut session = session();

    let update = session.apply(online()).unwrap();

    assert_eq!(update.previous, Status::Checking);
    assert_eq!(update.current, Status::Online);
    assert_eq!(update.action, Some(TransitionAction::BecameOnline));
    assert_eq!(update.display.tooltip, "HTTP 200");
    assert_eq!(update.event.url, "https://example.com");
    assert_eq!(session.diagnostic(), "HTTP 200");
}

#[test]
fn test_repeated_status_is_idempotent() {
    let mut session = session();
    session.apply(online());

    let update = session.apply(Classification::new(Status::Online, "HTTP 204")).unwrap();

    assert_eq!(update.action, None);
    // The tooltip still tracks the latest reason
    assert_eq!(update.display.tooltip, "HTTP 204");
}

#[test]
fn test_flapping_fires_each_transition() {
    let mut session = session();
    let actions: Vec<_> = [online(), offline(), online(), offline()]
        .into_iter()
        .map(|c| session.apply(c).unwrap().action)
        .collect();

    assert_eq!(
        actions,
        vec![
            Some(TransitionAction::BecameOnline),
            Some(TransitionAction::BecameOffline),
            Some(TransitionAction::BecameOnline),
            Some(TransitionAction::BecameOffline),
        ]
    );
}

#[test]
fn test_error_fires_no_action() {
    let mut session = session();
    session.apply(online());

    let update = session
        .apply(Classification::new(Status::Error, "URL parameter is required"))
        .unwrap();

    assert_eq!(update.current, Status::Error);
    assert_eq!(update.action, None);
}

#[test]
fn test_deactivated_session_discards_results() {
    let mut session = session();
    session.apply(online());
    session.deactivate();

    assert!(!session.is_active());
    assert!(session.apply(offline()).is_none());
    assert_eq!(session.status(), Status::Online);
}

#[test]
fn test_dispatch_routes_to_matching_callbacks() {
    let connected = EventRecorder::new();
    let disconnected = EventRecorder::new();
    let callbacks = SessionCallbacks::new()
        .on_became_online(connected.callback())
        .on_became_offline(disconnected.callback());

    let mut session = session();
    for classification in [online(), online(), offline()] {
        let update = session.apply(classification).unwrap();
        callbacks.dispatch(&update, true);
    }

    assert_eq!(connected.count(), 1);
    assert_eq!(disconnected.count(), 1);
    assert_eq!(disconnected.events()[0].status, Status::Offline);
}

#[test]
fn test_dispatch_renders_every_update() {
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let sink = rendered.clone();
    let callbacks = SessionCallbacks::new().on_status_changed(move |display| {
        sink.lock().unwrap().push(display.keyword.clone());
    });

    let mut session = session();
    for classification in [online(), online()] {
        let update = session.apply(classification).unwrap();
        callbacks.dispatch(&update, true);
    }
    let update = session.apply(offline()).unwrap();
    callbacks.dispatch(&update, false);

    assert_eq!(*rendered.lock().unwrap(), vec!["online", "online"]);
}

#[test]
fn test_failing_callback_does_not_block_others_or_state() {
    let recorder = EventRecorder::new();
    let callbacks = SessionCallbacks::new()
        .on_became_online(|_| Err(ActionError::Failed("boom".to_string())))
        .on_became_online(recorder.callback());

    let mut session = session();
    let update = session.apply(online()).unwrap();
    let errors = callbacks.dispatch(&update, true);

    assert_eq!(errors.len(), 1);
    assert_eq!(recorder.count(), 1);
    assert_eq!(session.status(), Status::Online);
}
