use async_trait::async_trait;
use cname_sync_domain::DomainError;

/// Source of the server names the reverse proxy is configured to serve.
#[async_trait]
pub trait ProxyConfigSource: Send + Sync {
    /// Every declared domain in scan order, duplicates included. Fails only
    /// when the source itself is unavailable; unreadable entries are skipped.
    async fn read_domains(&self) -> Result<Vec<String>, DomainError>;
}
