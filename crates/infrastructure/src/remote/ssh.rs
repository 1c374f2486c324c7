use cname_sync_domain::config::PiholeConfig;
use cname_sync_domain::DomainError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// ssh reserves this exit status for its own failures (connect, auth,
/// host key), as opposed to the remote command's status.
const SSH_ERROR_EXIT_CODE: i32 = 255;

/// Runs single commands on the Pi-hole host through the `ssh` client in
/// batch mode. Each call is one connection; nothing is kept open between
/// cycles.
#[derive(Debug, Clone)]
pub struct SshSession {
    program: String,
    destination: String,
    key_path: String,
    known_hosts_path: String,
    connect_timeout_secs: u64,
}

impl SshSession {
    pub fn new(config: &PiholeConfig) -> Self {
        Self {
            program: "ssh".to_string(),
            destination: config.destination(),
            key_path: config.ssh_key_path.clone(),
            known_hosts_path: config.known_hosts_path.clone(),
            connect_timeout_secs: config.connect_timeout_secs,
        }
    }

    /// Substitute the client binary (tests, or a wrapper script).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn command_args(&self, remote_command: &str) -> Vec<String> {
        vec![
            "-i".to_string(),
            self.key_path.clone(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout_secs),
            "-o".to_string(),
            format!("UserKnownHostsFile={}", self.known_hosts_path),
            self.destination.clone(),
            remote_command.to_string(),
        ]
    }

    /// Runs `remote_command` and returns its trimmed stdout.
    pub async fn run(&self, remote_command: &str) -> Result<String, DomainError> {
        debug!(host = %self.destination, command = remote_command, "Running SSH command");

        let output = Command::new(&self.program)
            .args(self.command_args(remote_command))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DomainError::RemoteUnreachable {
                host: self.destination.clone(),
                reason: format!("failed to start {}: {}", self.program, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        debug!(
            host = %self.destination,
            code = ?output.status.code(),
            stdout = %stdout,
            stderr = %stderr,
            "SSH command finished"
        );

        if output.status.success() {
            return Ok(stdout);
        }

        match output.status.code() {
            Some(SSH_ERROR_EXIT_CODE) => Err(DomainError::RemoteUnreachable {
                host: self.destination.clone(),
                reason: stderr,
            }),
            code => Err(DomainError::RemoteCommandFailed {
                command: remote_command.to_string(),
                code: code.unwrap_or(-1),
                stderr,
            }),
        }
    }
}

/// Single-quotes `value` for a POSIX shell.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
