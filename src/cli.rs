use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Website reachability prober with status badge and connect/disconnect actions")]
pub struct Cli {
    /// URL to probe (overrides config)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Badge label (defaults to the URL host)
    #[arg(short = 'l', long = "label")]
    pub label: Option<String>,

    /// Probe interval, e.g. 1h, 30m, 1h30m5s
    #[arg(short = 'i', long = "interval")]
    pub interval: Option<String>,

    /// Do not follow redirects; 3xx responses count as offline
    #[arg(long = "no-follow-redirects")]
    pub no_follow_redirects: bool,

    /// Use GET instead of HEAD for the primary request
    #[arg(long = "prefer-get")]
    pub prefer_get: bool,

    /// Keep probing and running actions without printing the badge
    #[arg(long = "background-only")]
    pub background_only: bool,

    /// Request timeout in milliseconds
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// Command to run when the site becomes online (repeatable)
    #[arg(long = "on-online", value_name = "CMD")]
    pub on_online: Vec<String>,

    /// Command to run when the site becomes offline (repeatable)
    #[arg(long = "on-offline", value_name = "CMD")]
    pub on_offline: Vec<String>,

    /// Probe once, print the badge and exit (0 online, 1 offline, 2 error)
    #[arg(long = "once")]
    pub once: bool,

    /// Print the badge as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Config file path (default ~/.sitecheck/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Write a default config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print the effective configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Validate the effective configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.target.url = url.clone();
        }
        if let Some(label) = &self.label {
            config.target.label = label.clone();
        }
        if let Some(interval) = &self.interval {
            config.target.interval = interval.clone();
        }
        if self.no_follow_redirects {
            config.target.follow_redirects = false;
        }
        if self.prefer_get {
            config.target.prefer_get = true;
        }
        if self.background_only {
            config.target.background_only = true;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.target.request_timeout_ms = timeout_ms;
        }
        config.actions.connect.extend(self.on_online.iter().cloned());
        config.actions.disconnect.extend(self.on_offline.iter().cloned());
    }
}
