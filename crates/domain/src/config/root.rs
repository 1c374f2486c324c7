use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pihole::{PiholeConfig, PLACEHOLDER_PIHOLE_HOST};
use super::sync::{SyncConfig, PLACEHOLDER_TARGET_HOST};

const LOCAL_CONFIG_PATH: &str = "cname-sync.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/cname-sync/config.toml";

/// Main configuration structure for CNAME Sync
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Remote Pi-hole host and management commands
    #[serde(default)]
    pub pihole: PiholeConfig,

    /// Proxy config source, CNAME target and polling
    #[serde(default)]
    pub sync: SyncConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, environment and command line
    ///
    /// Priority order (highest last):
    /// 1. Defaults
    /// 2. Explicit path, else cname-sync.toml, else /etc/cname-sync/config.toml
    /// 3. Environment variables
    /// 4. Command-line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli_overrides, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides(lookup)?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PIHOLE_HOST") {
            self.pihole.host = host;
        }
        if let Some(user) = lookup("PIHOLE_SSH_USER") {
            self.pihole.ssh_user = Some(user).filter(|u| !u.is_empty());
        }
        if let Some(path) = lookup("SSH_KEY_PATH") {
            self.pihole.ssh_key_path = path;
        }
        if let Some(target) = lookup("NPM_TARGET_HOST") {
            self.sync.target_host = target;
        }
        if let Some(dir) = lookup("NPM_CONFIG_DIR") {
            self.sync.proxy_config_dir = dir;
        }
        if let Some(raw) = lookup("TESTING_MODE") {
            self.sync.testing_mode = parse_flag(&raw);
        }
        if let Some(raw) = lookup("SLEEP_INTERVAL") {
            self.sync.interval_secs = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("SLEEP_INTERVAL".to_string(), raw))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(interval) = overrides.interval_secs {
            self.sync.interval_secs = interval;
        }
        if overrides.testing_mode {
            self.sync.testing_mode = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pihole.host.trim().is_empty() || self.pihole.host == PLACEHOLDER_PIHOLE_HOST {
            return Err(ConfigError::Validation(
                "Please set PIHOLE_HOST to the address of your Pi-hole".to_string(),
            ));
        }

        if self.sync.target_host.trim().is_empty()
            || self.sync.target_host == PLACEHOLDER_TARGET_HOST
        {
            return Err(ConfigError::Validation(
                "Please set NPM_TARGET_HOST to the CNAME target for proxied domains".to_string(),
            ));
        }

        if self.sync.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Polling interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Only `true` (any case) enables; every other value leaves the flag off.
fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub interval_secs: Option<u64>,
    pub testing_mode: bool,
}
