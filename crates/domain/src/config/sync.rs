use serde::{Deserialize, Serialize};

/// Shipped default for the CNAME target. Startup refuses to run against it.
pub const PLACEHOLDER_TARGET_HOST: &str = "npm.example.com";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default = "default_proxy_config_dir")]
    pub proxy_config_dir: String,

    #[serde(default = "default_config_extension")]
    pub config_extension: String,

    #[serde(default = "default_target_host")]
    pub target_host: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Compute and log changes without writing to the DNS host.
    #[serde(default)]
    pub testing_mode: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            proxy_config_dir: default_proxy_config_dir(),
            config_extension: default_config_extension(),
            target_host: default_target_host(),
            interval_secs: default_interval_secs(),
            testing_mode: false,
        }
    }
}

fn default_proxy_config_dir() -> String {
    "/app/npm".to_string()
}
fn default_config_extension() -> String {
    "conf".to_string()
}
fn default_target_host() -> String {
    PLACEHOLDER_TARGET_HOST.to_string()
}
fn default_interval_secs() -> u64 {
    900
}
