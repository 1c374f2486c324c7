use cname_sync_application::use_cases::{SyncCnameRecordsUseCase, SyncOutcome, SyncState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 900;

/// Fixed-interval driver for [`SyncCnameRecordsUseCase`].
///
///   - First cycle runs immediately, then once per interval
///   - Cycles never overlap; a slow cycle delays the next tick
///   - A failed cycle is logged and retried on the next tick
///   - Owns the [`SyncState`] carried between cycles
pub struct CnameSyncJob {
    sync: Arc<SyncCnameRecordsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CnameSyncJob {
    pub fn new(sync: Arc<SyncCnameRecordsUseCase>) -> Self {
        Self {
            sync,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Runs one cycle against `state`, logging instead of returning errors.
    pub async fn run_cycle(&self, state: &mut SyncState) -> Option<SyncOutcome> {
        match self.sync.execute(state).await {
            Ok(outcome) => {
                if !outcome.unchanged {
                    info!(
                        domains = outcome.domains_found,
                        added = outcome.added,
                        already_present = outcome.already_present,
                        applied = outcome.applied,
                        restarted = outcome.restarted,
                        "CNAME sync cycle completed"
                    );
                }
                Some(outcome)
            }
            Err(e) if e.is_remote() => {
                warn!(error = %e, "Pi-hole unavailable, retrying next cycle");
                None
            }
            Err(e) => {
                error!(error = %e, "CNAME sync cycle failed");
                None
            }
        }
    }

    /// Loops until the cancellation token fires. A running cycle is allowed
    /// to finish first. Returns the final state.
    pub async fn run(&self) -> SyncState {
        info!(
            interval_secs = self.interval_secs,
            testing_mode = self.sync.testing_mode(),
            "Starting CNAME sync job"
        );

        let mut state = SyncState::new();
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("CnameSyncJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.run_cycle(&mut state).await;
                    info!(interval_secs = self.interval_secs, "Sleeping until next check");
                }
            }
        }

        state
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<SyncState> {
        tokio::spawn(async move { self.run().await })
    }
}
