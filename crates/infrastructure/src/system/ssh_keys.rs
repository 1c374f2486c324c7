use cname_sync_domain::DomainError;
use std::path::Path;
use std::process::Stdio;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Present,
    /// Freshly created; the public half still has to be installed remotely.
    Generated,
}

/// Makes sure a private key exists at `key_path`, creating an unencrypted
/// RSA key pair with `ssh-keygen` when it does not.
pub async fn ensure_key_pair(key_path: &str) -> Result<KeyStatus, DomainError> {
    ensure_key_pair_with(key_path, "ssh-keygen").await
}

async fn ensure_key_pair_with(key_path: &str, keygen: &str) -> Result<KeyStatus, DomainError> {
    if fs::try_exists(key_path).await.unwrap_or(false) {
        debug!(path = key_path, "SSH key present");
        return Ok(KeyStatus::Present);
    }

    if let Some(parent) = Path::new(key_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }
    }

    info!(path = key_path, "Generating SSH key");
    let status = Command::new(keygen)
        .args(["-t", "rsa", "-N", "", "-f", key_path])
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|e| DomainError::IoError(format!("failed to run {}: {}", keygen, e)))?;

    if !status.success() {
        return Err(DomainError::IoError(format!(
            "{} exited with {}",
            keygen, status
        )));
    }

    Ok(KeyStatus::Generated)
}

/// Appends the host's keys to `known_hosts_path` via `ssh-keyscan -H`.
/// Best effort: the entry may already be present, and a failure here
/// surfaces later as an unreachable host.
pub async fn trust_host(host: &str, known_hosts_path: &str) {
    let output = match Command::new("ssh-keyscan")
        .args(["-H", host])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
    {
        Ok(output) if output.status.success() && !output.stdout.is_empty() => output,
        Ok(output) => {
            debug!(host, status = %output.status, "ssh-keyscan returned no keys");
            return;
        }
        Err(e) => {
            debug!(host, error = %e, "ssh-keyscan unavailable");
            return;
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(known_hosts_path)
        .await;

    match file {
        Ok(mut file) => {
            if let Err(e) = file.write_all(&output.stdout).await {
                debug!(path = known_hosts_path, error = %e, "Failed to record host key");
            }
        }
        Err(e) => debug!(path = known_hosts_path, error = %e, "Cannot open known_hosts"),
    }
}
