use super::ssh::{shell_quote, SshSession};
use async_trait::async_trait;
use cname_sync_application::ports::CnameRecordStore;
use cname_sync_domain::config::PiholeConfig;
use cname_sync_domain::DomainError;
use tracing::info;

/// Pi-hole v6 CNAME list managed through `pihole-FTL --config` over SSH.
pub struct PiholeCnameStore {
    session: SshSession,
    read_command: String,
    write_command: String,
    restart_command: String,
}

impl PiholeCnameStore {
    pub fn new(session: SshSession, config: &PiholeConfig) -> Self {
        Self {
            session,
            read_command: config.read_command.clone(),
            write_command: config.write_command.clone(),
            restart_command: config.restart_command.clone(),
        }
    }

    pub fn write_command_line(&self, encoded: &str) -> String {
        format!("{} {}", self.write_command, shell_quote(encoded))
    }
}

#[async_trait]
impl CnameRecordStore for PiholeCnameStore {
    async fn fetch_cname_records(&self) -> Result<String, DomainError> {
        self.session.run(&self.read_command).await
    }

    async fn apply_cname_records(&self, encoded: &str) -> Result<(), DomainError> {
        let command = self.write_command_line(encoded);
        self.session.run(&command).await?;
        info!(host = %self.session.destination(), "CNAME list written");
        Ok(())
    }

    async fn restart_resolver(&self) -> Result<(), DomainError> {
        self.session.run(&self.restart_command).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PiholeConfig {
        PiholeConfig {
            host: "10.0.0.2".to_string(),
            ..PiholeConfig::default()
        }
    }

    fn store_with_program(program: &str) -> PiholeCnameStore {
        let config = config();
        PiholeCnameStore::new(SshSession::new(&config).with_program(program), &config)
    }

    #[test]
    fn test_write_command_line_quotes_list() {
        let store = store_with_program("ssh");

        assert_eq!(
            store.write_command_line(r#"[ "a.example.com,npm.lan" ]"#),
            r#"sudo pihole-FTL --config dns.cnameRecords '[ "a.example.com,npm.lan" ]'"#
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_read_command() {
        let store = store_with_program("echo");

        let raw = store.fetch_cname_records().await.unwrap();

        assert!(raw.ends_with("10.0.0.2 sudo pihole-FTL --config dns.cnameRecords"));
    }

    #[tokio::test]
    async fn test_apply_and_restart_succeed_on_zero_exit() {
        let store = store_with_program("true");

        assert!(store.apply_cname_records("[]").await.is_ok());
        assert!(store.restart_resolver().await.is_ok());
    }

    #[tokio::test]
    async fn test_restart_failure_propagates() {
        let store = store_with_program("false");

        let result = store.restart_resolver().await;

        assert!(matches!(result, Err(DomainError::RemoteCommandFailed { .. })));
    }
}
