use super::types::{Config, TargetConfig};
use crate::core::probe::types::DEFAULT_REQUEST_TIMEOUT_MS;

/// Default interval string written to new config files
pub const DEFAULT_INTERVAL: &str = "1h";

impl Default for Config {
    fn default() -> Self {
        Config {
            target: TargetConfig::default(),
            actions: Default::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            url: String::new(),
            label: String::new(),
            interval: DEFAULT_INTERVAL.to_string(),
            follow_redirects: true,
            prefer_get: false,
            background_only: false,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
