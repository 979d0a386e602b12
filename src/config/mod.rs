//! Configuration loading, validation and templates.
//!
//! Values come from `~/.sitecheck/config.toml` (or `--config <PATH>`), then CLI
//! overrides are applied on top.

mod defaults;
pub mod types;

pub use defaults::DEFAULT_INTERVAL;
pub use types::{ActionsConfig, Config, TargetConfig};

use crate::core::probe::actions::CommandAction;
use crate::core::probe::types::ProbeTarget;
use crate::core::probe::url::{parse_target_url, UrlError};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config read error: {0}")]
    Read(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("URL parameter is required")]
    MissingUrl,
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("request_timeout_ms must be greater than zero")]
    ZeroTimeout,
}

impl Config {
    /// Default config path: `~/.sitecheck/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(home.join(".sitecheck").join("config.toml"))
    }

    /// Load from `path`, or from the default path
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::read(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write the default template if no config exists yet; returns the path
    pub fn init_at(path: &Path) -> Result<PathBuf, ConfigError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, Self::default().to_toml()?)?;
        }
        Ok(path.to_path_buf())
    }

    pub fn init() -> Result<PathBuf, ConfigError> {
        Self::init_at(&Self::default_path()?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn print(&self) -> Result<(), ConfigError> {
        println!("{}", self.to_toml()?);
        Ok(())
    }

    /// Validate the settings the prober depends on
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.target.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        parse_target_url(&self.target.url)?;
        if self.target.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Immutable probe target for this configuration
    pub fn to_target(&self) -> ProbeTarget {
        ProbeTarget::new(self.target.url.trim())
            .with_label(&self.target.label)
            .with_interval(&self.target.interval)
            .with_follow_redirects(self.target.follow_redirects)
            .with_prefer_get(self.target.prefer_get)
            .with_background_only(self.target.background_only)
            .with_request_timeout_ms(self.target.request_timeout_ms)
    }

    pub fn connect_actions(&self) -> Vec<CommandAction> {
        self.actions.connect.iter().map(CommandAction::new).collect()
    }

    pub fn disconnect_actions(&self) -> Vec<CommandAction> {
        self.actions.disconnect.iter().map(CommandAction::new).collect()
    }
}
