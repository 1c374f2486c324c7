use async_trait::async_trait;
use cname_sync_application::ports::{CnameRecordStore, ProxyConfigSource};
use cname_sync_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct MockProxyConfigSource {
    domains: Arc<RwLock<Vec<String>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    read_calls: Arc<AtomicUsize>,
}

impl MockProxyConfigSource {
    pub fn new() -> Self {
        Self {
            domains: Arc::new(RwLock::new(Vec::new())),
            error: Arc::new(RwLock::new(None)),
            read_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_domains(domains: Vec<&str>) -> Self {
        let source = Self::new();
        source.set_domains(domains);
        source
    }

    pub fn missing_directory(path: &str) -> Self {
        let source = Self::new();
        source.set_error(Some(DomainError::ProxyConfigDirUnavailable(
            path.to_string(),
        )));
        source
    }

    pub fn set_domains(&self, domains: Vec<&str>) {
        *self.domains.write().unwrap() = domains.into_iter().map(String::from).collect();
    }

    pub fn set_error(&self, error: Option<DomainError>) {
        *self.error.write().unwrap() = error;
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProxyConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProxyConfigSource for MockProxyConfigSource {
    async fn read_domains(&self) -> Result<Vec<String>, DomainError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.error.read().unwrap().clone() {
            return Err(err);
        }
        Ok(self.domains.read().unwrap().clone())
    }
}

/// In-memory Pi-hole: a successful apply becomes the next fetch response.
#[derive(Clone)]
pub struct MockCnameRecordStore {
    response: Arc<RwLock<String>>,
    applied: Arc<RwLock<Vec<String>>>,
    apply_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
    restart_calls: Arc<AtomicUsize>,
    fail_fetch: Arc<AtomicBool>,
    fail_apply: Arc<AtomicBool>,
    fail_restart: Arc<AtomicBool>,
}

impl MockCnameRecordStore {
    pub fn new() -> Self {
        Self::with_response("[]")
    }

    pub fn with_response(response: &str) -> Self {
        Self {
            response: Arc::new(RwLock::new(response.to_string())),
            applied: Arc::new(RwLock::new(Vec::new())),
            apply_calls: Arc::new(AtomicUsize::new(0)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
            restart_calls: Arc::new(AtomicUsize::new(0)),
            fail_fetch: Arc::new(AtomicBool::new(false)),
            fail_apply: Arc::new(AtomicBool::new(false)),
            fail_restart: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_response(&self, response: &str) {
        *self.response.write().unwrap() = response.to_string();
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_apply(&self, fail: bool) {
        self.fail_apply.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_restart(&self, fail: bool) {
        self.fail_restart.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn apply_calls(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }

    pub fn restart_calls(&self) -> usize {
        self.restart_calls.load(Ordering::SeqCst)
    }

    pub fn applied(&self) -> Vec<String> {
        self.applied.read().unwrap().clone()
    }

    pub fn last_applied(&self) -> Option<String> {
        self.applied.read().unwrap().last().cloned()
    }

    pub fn remote_calls(&self) -> usize {
        self.fetch_calls() + self.apply_calls() + self.restart_calls()
    }
}

impl Default for MockCnameRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unreachable_host() -> DomainError {
    DomainError::RemoteUnreachable {
        host: "pihole.test".to_string(),
        reason: "Connection refused".to_string(),
    }
}

#[async_trait]
impl CnameRecordStore for MockCnameRecordStore {
    async fn fetch_cname_records(&self) -> Result<String, DomainError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(unreachable_host());
        }
        Ok(self.response.read().unwrap().clone())
    }

    async fn apply_cname_records(&self, encoded: &str) -> Result<(), DomainError> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_apply.load(Ordering::SeqCst) {
            return Err(DomainError::RemoteCommandFailed {
                command: "pihole-FTL --config dns.cnameRecords".to_string(),
                code: 1,
                stderr: "permission denied".to_string(),
            });
        }
        self.applied.write().unwrap().push(encoded.to_string());
        *self.response.write().unwrap() = encoded.to_string();
        Ok(())
    }

    async fn restart_resolver(&self) -> Result<(), DomainError> {
        self.restart_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_restart.load(Ordering::SeqCst) {
            return Err(unreachable_host());
        }
        Ok(())
    }
}
