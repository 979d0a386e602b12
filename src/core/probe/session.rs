//! Prober state machine
//!
//! `ProberSession` owns the current [`Status`] and diagnostic for one target.
//! Transitions are decided by an explicit table ([`transition`]); callbacks are
//! dispatched separately from the state update so a failing callback can never
//! leave the session half-updated.

use crate::core::probe::debug_logger::get_debug_logger;
use crate::core::probe::types::{
    ActionError, Classification, DisplayState, ProbeTarget, Status, TransitionEvent,
};
use std::sync::Arc;

/// Side effect fired on a transition into Online or Offline
pub type TransitionCallback =
    Arc<dyn Fn(&TransitionEvent) -> Result<(), ActionError> + Send + Sync>;

/// Display update fired on every applied classification
pub type StatusChangedCallback = Arc<dyn Fn(&DisplayState) + Send + Sync>;

/// Callback fired for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    BecameOnline,
    BecameOffline,
}

/// Transition table
///
/// | from \ to | same | Online | Offline | Checking / Error |
/// |-----------|------|--------|---------|------------------|
/// | any       | -    | BecameOnline | BecameOffline | - |
pub fn transition(from: Status, to: Status) -> Option<TransitionAction> {
    if from == to {
        return None;
    }
    match to {
        Status::Online => Some(TransitionAction::BecameOnline),
        Status::Offline => Some(TransitionAction::BecameOffline),
        Status::Checking | Status::Error => None,
    }
}

/// Result of applying one classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub previous: Status,
    pub current: Status,
    pub action: Option<TransitionAction>,
    pub display: DisplayState,
    pub event: TransitionEvent,
}

/// Mutable runtime state for one configured target
#[derive(Debug, Clone)]
pub struct ProberSession {
    target: ProbeTarget,
    status: Status,
    diagnostic: String,
    active: bool,
}

impl ProberSession {
    pub fn new(target: ProbeTarget) -> Self {
        Self {
            target,
            status: Status::Checking,
            diagnostic: String::new(),
            active: true,
        }
    }

    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the session torn down; later results are discarded
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Current display model
    pub fn display(&self) -> DisplayState {
        DisplayState {
            label: self.target.label.clone(),
            keyword: self.status.keyword().to_string(),
            text: self.status.text().to_string(),
            tooltip: self.diagnostic.clone(),
            link: self.target.url.clone(),
        }
    }

    /// Apply a classification
    ///
    /// Always updates status and diagnostic (last writer wins). Returns `None`
    /// when the session has been torn down.
    pub fn apply(&mut self, classification: Classification) -> Option<StatusUpdate> {
        if !self.active {
            return None;
        }

        let previous = self.status;
        self.status = classification.status;
        self.diagnostic = classification.reason;

        Some(StatusUpdate {
            previous,
            current: self.status,
            action: transition(previous, self.status),
            display: self.display(),
            event: TransitionEvent {
                status: self.status,
                url: self.target.url.clone(),
            },
        })
    }
}

/// Registered display and side-effect callbacks
#[derive(Clone, Default)]
pub struct SessionCallbacks {
    on_status_changed: Option<StatusChangedCallback>,
    on_became_online: Vec<TransitionCallback>,
    on_became_offline: Vec<TransitionCallback>,
}

impl SessionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_status_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&DisplayState) + Send + Sync + 'static,
    {
        self.on_status_changed = Some(Arc::new(callback));
        self
    }

    pub fn on_became_online<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TransitionEvent) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.on_became_online.push(Arc::new(callback));
        self
    }

    pub fn on_became_offline<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TransitionEvent) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.on_became_offline.push(Arc::new(callback));
        self
    }

    /// Dispatch callbacks for an applied update
    ///
    /// The display callback runs when `render` is set; transition callbacks run
    /// only for the matching action. Failures are logged and returned, never
    /// propagated.
    pub fn dispatch(&self, update: &StatusUpdate, render: bool) -> Vec<ActionError> {
        if render {
            if let Some(on_status_changed) = &self.on_status_changed {
                on_status_changed(&update.display);
            }
        }

        let callbacks = match update.action {
            Some(TransitionAction::BecameOnline) => &self.on_became_online,
            Some(TransitionAction::BecameOffline) => &self.on_became_offline,
            None => return Vec::new(),
        };

        let debug_logger = get_debug_logger();
        callbacks
            .iter()
            .filter_map(|callback| callback(&update.event).err())
            .inspect(|err| debug_logger.action_failed(update.current.keyword(), &err.to_string()))
            .collect()
    }
}
