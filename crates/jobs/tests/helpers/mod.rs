#![allow(dead_code)]

use async_trait::async_trait;
use cname_sync_application::ports::{CnameRecordStore, ProxyConfigSource};
use cname_sync_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockProxyConfigSource {
    domains: Arc<RwLock<Option<Vec<String>>>>,
    read_calls: Arc<AtomicUsize>,
}

impl MockProxyConfigSource {
    pub fn with_domains(domains: Vec<&str>) -> Self {
        let source = Self::default();
        *source.domains.write().unwrap() =
            Some(domains.into_iter().map(String::from).collect());
        source
    }

    /// Behaves like a proxy config directory that is not mounted.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProxyConfigSource for MockProxyConfigSource {
    async fn read_domains(&self) -> Result<Vec<String>, DomainError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.domains
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::ProxyConfigDirUnavailable("/app/npm".to_string()))
    }
}

#[derive(Clone)]
pub struct MockCnameRecordStore {
    response: Arc<RwLock<String>>,
    unreachable: Arc<AtomicBool>,
    apply_calls: Arc<AtomicUsize>,
    restart_calls: Arc<AtomicUsize>,
}

impl MockCnameRecordStore {
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new("[]".to_string())),
            unreachable: Arc::new(AtomicBool::new(false)),
            apply_calls: Arc::new(AtomicUsize::new(0)),
            restart_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn response(&self) -> String {
        self.response.read().unwrap().clone()
    }

    pub fn apply_calls(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }

    pub fn restart_calls(&self) -> usize {
        self.restart_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCnameRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CnameRecordStore for MockCnameRecordStore {
    async fn fetch_cname_records(&self) -> Result<String, DomainError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(DomainError::RemoteUnreachable {
                host: "10.0.0.2".to_string(),
                reason: "Connection timed out".to_string(),
            });
        }
        Ok(self.response())
    }

    async fn apply_cname_records(&self, encoded: &str) -> Result<(), DomainError> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        *self.response.write().unwrap() = encoded.to_string();
        Ok(())
    }

    async fn restart_resolver(&self) -> Result<(), DomainError> {
        self.restart_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
