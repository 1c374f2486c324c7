use async_trait::async_trait;
use cname_sync_domain::DomainError;

/// Remote DNS host holding the authoritative CNAME list.
#[async_trait]
pub trait CnameRecordStore: Send + Sync {
    /// Raw record list as printed by the host; may be empty.
    async fn fetch_cname_records(&self) -> Result<String, DomainError>;

    /// Replaces the host's list with `encoded`.
    async fn apply_cname_records(&self, encoded: &str) -> Result<(), DomainError>;

    async fn restart_resolver(&self) -> Result<(), DomainError>;
}
