use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Proxy config directory unavailable: {0}")]
    ProxyConfigDirUnavailable(String),

    #[error("Invalid CNAME record: {0}")]
    InvalidCnameRecord(String),

    #[error("Remote host {host} is unreachable: {reason}")]
    RemoteUnreachable { host: String, reason: String },

    #[error("Remote command `{command}` failed with code {code}: {stderr}")]
    RemoteCommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors raised while talking to the DNS host. These end the current
    /// cycle and are retried on the next tick.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DomainError::RemoteUnreachable { .. } | DomainError::RemoteCommandFailed { .. }
        )
    }
}
