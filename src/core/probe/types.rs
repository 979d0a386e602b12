// Core types for website reachability probing
use crate::core::probe::interval::{parse_interval, DEFAULT_INTERVAL_MS};
use crate::core::probe::url::derive_label;
use std::time::Duration;

/// Default bound for a single status-readable or opaque request
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Bounded wait for the image-beacon fallback, enforced by the chain itself
pub const BEACON_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable per-session probe configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    /// Absolute http(s) URL of the origin; empty means "not configured"
    pub url: String,
    /// Display label (host name when not configured explicitly)
    pub label: String,
    /// Period between scheduled probes, always > 0
    pub interval_ms: u64,
    /// Follow redirects on status-readable requests
    pub follow_redirects: bool,
    /// Use GET for the primary request instead of HEAD
    pub prefer_get: bool,
    /// Run the prober and actions without rendering a badge
    pub background_only: bool,
    /// Timeout for primary, retry and opaque requests
    pub request_timeout_ms: u64,
}

impl ProbeTarget {
    /// Create a target with default settings; the label is derived from the URL
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            label: derive_label(&url),
            url,
            interval_ms: DEFAULT_INTERVAL_MS,
            follow_redirects: true,
            prefer_get: false,
            background_only: false,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Set the interval from a duration string such as `1h30m` (see [`parse_interval`])
    pub fn with_interval(mut self, interval: &str) -> Self {
        self.interval_ms = parse_interval(interval);
        self
    }

    /// Override the derived label; an empty label keeps the derived one
    pub fn with_label(mut self, label: &str) -> Self {
        if !label.trim().is_empty() {
            self.label = label.trim().to_string();
        }
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_prefer_get(mut self, prefer_get: bool) -> Self {
        self.prefer_get = prefer_get;
        self
    }

    pub fn with_background_only(mut self, background_only: bool) -> Self {
        self.background_only = background_only;
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    /// Whether a URL was configured at all
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Scheduling period; never zero even if the field was set directly
    pub fn interval(&self) -> Duration {
        if self.interval_ms == 0 {
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        } else {
            Duration::from_millis(self.interval_ms)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_ms == 0 {
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)
        } else {
            Duration::from_millis(self.request_timeout_ms)
        }
    }
}

/// User-visible classification of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Before the first classified result
    #[default]
    Checking,
    Online,
    Offline,
    /// Configuration problem (missing or invalid URL)
    Error,
}

impl Status {
    /// Status keyword for the display layer
    pub fn keyword(&self) -> &'static str {
        match self {
            Status::Checking => "checking",
            Status::Online => "online",
            Status::Offline => "offline",
            Status::Error => "error",
        }
    }

    /// Short badge text
    pub fn text(&self) -> &'static str {
        match self {
            Status::Checking => "Checking...",
            Status::Online => "Online",
            Status::Offline => "Offline",
            Status::Error => "Error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// HTTP method used by a status-readable request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeMethod {
    Head,
    Get,
}

impl ProbeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::Head => "HEAD",
            ProbeMethod::Get => "GET",
        }
    }
}

impl std::fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality of the evidence gathered by one probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The origin answered with a readable status code
    Reachable,
    /// The origin was unreachable or every attempt failed
    Unreachable,
    /// Completion was observed but no status code is available
    Inconclusive,
}

/// Raw observation handed to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Final HTTP status of a status-readable request
    Http(u16),
    /// Opaque request completed without a readable status
    Opaque,
    /// Image beacon loaded
    BeaconLoaded,
    /// Image beacon errored or timed out
    BeaconFailed,
    /// Every network attempt failed
    NetworkFailure,
}

/// Result of a single probe; produced fresh on every attempt
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub kind: OutcomeKind,
    pub evidence: Evidence,
    pub status_code: Option<u16>,
    /// Whether the final response came from a followed redirect (status-readable requests only)
    pub redirected: Option<bool>,
    /// Technical trail of the steps taken, e.g. "HEAD 405, GET 200"
    pub diagnostic: String,
}

impl ProbeOutcome {
    pub fn http(status_code: u16, redirected: bool, diagnostic: String) -> Self {
        Self {
            kind: OutcomeKind::Reachable,
            evidence: Evidence::Http(status_code),
            status_code: Some(status_code),
            redirected: Some(redirected),
            diagnostic,
        }
    }

    pub fn opaque(diagnostic: String) -> Self {
        Self {
            kind: OutcomeKind::Inconclusive,
            evidence: Evidence::Opaque,
            status_code: None,
            redirected: None,
            diagnostic,
        }
    }

    pub fn beacon(loaded: bool, diagnostic: String) -> Self {
        Self {
            kind: if loaded {
                OutcomeKind::Inconclusive
            } else {
                OutcomeKind::Unreachable
            },
            evidence: if loaded {
                Evidence::BeaconLoaded
            } else {
                Evidence::BeaconFailed
            },
            status_code: None,
            redirected: None,
            diagnostic,
        }
    }

    pub fn network_failure(diagnostic: String) -> Self {
        Self {
            kind: OutcomeKind::Unreachable,
            evidence: Evidence::NetworkFailure,
            status_code: None,
            redirected: None,
            diagnostic,
        }
    }
}

/// Classifier output: status plus human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: Status,
    pub reason: String,
}

impl Classification {
    pub fn new(status: Status, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// Display model consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DisplayState {
    pub label: String,
    /// One of `checking | online | offline | error`
    pub keyword: String,
    pub text: String,
    /// Classifier reason; empty before the first result
    pub tooltip: String,
    /// Target URL the badge links to
    pub link: String,
}

/// Payload handed to transition callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    pub status: Status,
    pub url: String,
}

/// Failures of a single network request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    /// Policy stopped the request before a status could be read
    #[error("restricted: {0}")]
    Restricted(String),
    #[error("resource did not load: {0}")]
    NotLoaded(String),
    #[error("client error: {0}")]
    Client(String),
}

/// Failures of a connect/disconnect side effect
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("empty action command")]
    EmptyCommand,
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("action failed: {0}")]
    Failed(String),
}
