use cname_sync_application::use_cases::SyncCnameRecordsUseCase;
use cname_sync_domain::Config;
use cname_sync_infrastructure::proxy::NginxConfigReader;
use cname_sync_infrastructure::remote::{PiholeCnameStore, SshSession};
use cname_sync_jobs::CnameSyncJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct Services {
    pub sync: Arc<SyncCnameRecordsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let source = Arc::new(NginxConfigReader::new(
            &config.sync.proxy_config_dir,
            &config.sync.config_extension,
        )?);

        let session = SshSession::new(&config.pihole);
        let store = Arc::new(PiholeCnameStore::new(session, &config.pihole));

        let sync = SyncCnameRecordsUseCase::new(source, store, config.sync.target_host.as_str())
            .with_testing_mode(config.sync.testing_mode);

        Ok(Self {
            sync: Arc::new(sync),
        })
    }

    pub fn sync_job(&self, config: &Config, shutdown: CancellationToken) -> CnameSyncJob {
        CnameSyncJob::new(self.sync.clone())
            .with_interval(config.sync.interval_secs)
            .with_cancellation(shutdown)
    }
}
