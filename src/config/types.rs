use serde::{Deserialize, Serialize};

/// Top-level configuration file (`~/.sitecheck/config.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub actions: ActionsConfig,
}

/// Probe target settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Absolute http(s) URL to probe
    pub url: String,
    /// Badge label; host name when empty
    pub label: String,
    /// Duration string such as "1h", "30m", "1h30m5s"
    pub interval: String,
    pub follow_redirects: bool,
    pub prefer_get: bool,
    pub background_only: bool,
    pub request_timeout_ms: u64,
}

/// Shell commands fired on transitions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Run when the target becomes online
    pub connect: Vec<String>,
    /// Run when the target becomes offline
    pub disconnect: Vec<String>,
}
