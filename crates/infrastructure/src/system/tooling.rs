use cname_sync_domain::DomainError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Fails unless `tool --version` can be executed successfully.
pub async fn require_tool(tool: &str) -> Result<(), DomainError> {
    let status = Command::new(tool)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| DomainError::ConfigError(format!("{} is not installed: {}", tool, e)))?;

    if !status.success() {
        return Err(DomainError::ConfigError(format!(
            "{} --version exited with {}",
            tool, status
        )));
    }

    debug!(tool, "Required tool available");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_tool_is_error() {
        let result = require_tool("definitely-not-an-installed-tool").await;

        assert!(matches!(result, Err(DomainError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_failing_tool_is_error() {
        assert!(require_tool("false").await.is_err());
    }

    #[tokio::test]
    async fn test_available_tool_is_ok() {
        assert!(require_tool("true").await.is_ok());
    }
}
