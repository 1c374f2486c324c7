use serde::{Deserialize, Serialize};

/// Shipped default for the DNS host. Startup refuses to run against it.
pub const PLACEHOLDER_PIHOLE_HOST: &str = "192.168.0.0";

/// How to reach the Pi-hole host and which commands manage its CNAME list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PiholeConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Login user; `None` lets ssh pick (config file or current user).
    #[serde(default)]
    pub ssh_user: Option<String>,

    #[serde(default = "default_ssh_key_path")]
    pub ssh_key_path: String,

    #[serde(default = "default_known_hosts_path")]
    pub known_hosts_path: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_read_command")]
    pub read_command: String,

    /// The encoded record list is appended as one shell-quoted argument.
    #[serde(default = "default_read_command")]
    pub write_command: String,

    #[serde(default = "default_restart_command")]
    pub restart_command: String,

    #[serde(default = "default_json_tool")]
    pub json_tool: String,
}

impl Default for PiholeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            ssh_user: None,
            ssh_key_path: default_ssh_key_path(),
            known_hosts_path: default_known_hosts_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_command: default_read_command(),
            write_command: default_read_command(),
            restart_command: default_restart_command(),
            json_tool: default_json_tool(),
        }
    }
}

impl PiholeConfig {
    /// `user@host` when a login user is configured, otherwise the bare host.
    pub fn destination(&self) -> String {
        match &self.ssh_user {
            Some(user) if !user.is_empty() => format!("{}@{}", user, self.host),
            _ => self.host.clone(),
        }
    }
}

fn default_host() -> String {
    PLACEHOLDER_PIHOLE_HOST.to_string()
}
fn default_ssh_key_path() -> String {
    "/root/.ssh/id_rsa".to_string()
}
fn default_known_hosts_path() -> String {
    "/root/.ssh/known_hosts".to_string()
}
fn default_connect_timeout_secs() -> u64 {
    30
}
fn default_read_command() -> String {
    "sudo pihole-FTL --config dns.cnameRecords".to_string()
}
fn default_restart_command() -> String {
    "sudo systemctl restart pihole-FTL".to_string()
}
fn default_json_tool() -> String {
    "jq".to_string()
}
