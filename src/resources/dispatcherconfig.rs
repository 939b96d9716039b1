//! Dispatcher configuration.
//!
//! Settings are loaded from an INI file. Defaults are safe to start with, so
//! a missing file or a missing key is never fatal to the caller that chooses
//! to fall back on them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [dispatcher]
//! failure_policy = fail_fast
//!
//! [log]
//! level = info
//! ```

use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::{LevelFilter, info};

use crate::error::ConfigError;
use crate::resources::dispatcher::{EventDispatcher, FailurePolicy};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_CONFIG_PATH: &str = "./events.ini";

/// Dispatcher and logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// Policy applied when a listener fails during emit.
    pub failure_policy: FailurePolicy,
    /// Default log filter for the demo binary.
    pub log_level: LevelFilter,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            log_level: DEFAULT_LOG_LEVEL,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Unparseable values are an
    /// error and leave `self` untouched.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;

        let mut failure_policy = self.failure_policy;
        if let Some(value) = config.get("dispatcher", "failure_policy") {
            failure_policy = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    section: "dispatcher",
                    key: "failure_policy",
                    value,
                })?;
        }

        let mut log_level = self.log_level;
        if let Some(value) = config.get("log", "level") {
            log_level = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    section: "log",
                    key: "level",
                    value,
                })?;
        }

        self.failure_policy = failure_policy;
        self.log_level = log_level;

        info!(
            "Loaded config from {:?}: failure_policy={}, log_level={}",
            self.config_path, self.failure_policy, self.log_level
        );

        Ok(())
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set(
            "dispatcher",
            "failure_policy",
            Some(self.failure_policy.to_string()),
        );
        config.set(
            "log",
            "level",
            Some(self.log_level.to_string().to_lowercase()),
        );

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Build an empty dispatcher using this configuration.
    pub fn build_dispatcher(&self) -> EventDispatcher {
        EventDispatcher::with_policy(self.failure_policy)
    }
}
