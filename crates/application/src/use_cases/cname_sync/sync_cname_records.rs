use crate::ports::{CnameRecordStore, ProxyConfigSource};
use crate::services::{CnameListCodec, CnameMergePlanner};
use cname_sync_domain::{DesiredDomains, DomainError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State carried from one cycle to the next. Owned by the caller so each
/// cycle can be driven and inspected on its own.
#[derive(Debug, Default)]
pub struct SyncState {
    /// Desired domains of the last cycle that ran to completion.
    pub previous: Option<DesiredDomains>,
    /// Set after a successful apply, cleared after a successful restart.
    pub pending_restart: bool,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub domains_found: usize,
    pub added: usize,
    pub already_present: usize,
    /// Desired set equal to the previous cycle's; nothing was fetched.
    pub unchanged: bool,
    pub applied: bool,
    pub restarted: bool,
}

/// Use case: bring the Pi-hole CNAME list in line with the proxy config.
/// One call is one reconciliation cycle.
pub struct SyncCnameRecordsUseCase {
    source: Arc<dyn ProxyConfigSource>,
    store: Arc<dyn CnameRecordStore>,
    target_host: Arc<str>,
    testing_mode: bool,
}

impl SyncCnameRecordsUseCase {
    pub fn new(
        source: Arc<dyn ProxyConfigSource>,
        store: Arc<dyn CnameRecordStore>,
        target_host: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            source,
            store,
            target_host: target_host.into(),
            testing_mode: false,
        }
    }

    pub fn with_testing_mode(mut self, testing_mode: bool) -> Self {
        self.testing_mode = testing_mode;
        self
    }

    pub fn testing_mode(&self) -> bool {
        self.testing_mode
    }

    pub async fn execute(&self, state: &mut SyncState) -> Result<SyncOutcome, DomainError> {
        info!("Starting check");

        let desired = DesiredDomains::from_extracted(self.source.read_domains().await?);
        let mut outcome = SyncOutcome {
            domains_found: desired.len(),
            ..Default::default()
        };
        info!(domains = desired.len(), "Total domains found");

        if state
            .previous
            .as_ref()
            .is_some_and(|previous| previous.same_domains(&desired))
        {
            debug!("Proxy domains unchanged since last cycle");
            outcome.unchanged = true;
            outcome.restarted = self.restart_if_pending(state).await?;
            return Ok(outcome);
        }

        if desired.is_empty() {
            info!("No domains to process");
            outcome.restarted = self.restart_if_pending(state).await?;
            state.previous = Some(desired);
            return Ok(outcome);
        }

        info!(domains = desired.len(), "Processing domains for CNAME records");

        let raw = self.store.fetch_cname_records().await?;
        let existing = CnameListCodec::decode(&raw);
        debug!(records = existing.len(), "Existing CNAME records fetched");
        for entry in existing.iter().filter(|entry| entry.as_record().is_none()) {
            warn!(entry = %entry.to_entry(), "Keeping unrecognised CNAME entry unchanged");
        }

        let plan = CnameMergePlanner::plan(&existing, &desired, &self.target_host);

        for domain in &plan.already_present {
            info!(domain = %domain, "CNAME record already exists");
        }
        for record in &plan.target_mismatches {
            warn!(
                domain = %record.domain,
                current_target = %record.target,
                configured_target = %self.target_host,
                "Existing CNAME record points to a different target, leaving it unchanged"
            );
        }
        for domain in &plan.rejected {
            warn!(domain = %domain, "Skipping domain that cannot be stored as a CNAME record");
        }
        for record in &plan.added {
            info!(domain = %record.domain, target = %record.target, "Adding CNAME record");
        }

        outcome.already_present = plan.already_present.len();
        outcome.added = plan.added.len();

        if plan.has_changes() {
            let encoded = CnameListCodec::encode(&plan.records);

            if self.testing_mode {
                info!(records = %encoded, "[TEST] Would update CNAME records");
                info!(
                    added = plan.added.len(),
                    "[TEST] Would restart DNS resolver after update"
                );
            } else {
                self.store.apply_cname_records(&encoded).await?;
                state.pending_restart = true;
                outcome.applied = true;
                info!(added = plan.added.len(), "CNAME records updated successfully");
            }
        } else {
            info!("No changes detected");
        }

        outcome.restarted = self.restart_if_pending(state).await?;
        state.previous = Some(desired);
        Ok(outcome)
    }

    async fn restart_if_pending(&self, state: &mut SyncState) -> Result<bool, DomainError> {
        if !state.pending_restart || self.testing_mode {
            return Ok(false);
        }

        info!("Restarting DNS resolver to apply CNAME changes");
        self.store.restart_resolver().await?;
        state.pending_restart = false;
        info!("DNS resolver restarted successfully");
        Ok(true)
    }
}
