#![allow(dead_code)]

use async_trait::async_trait;
use identflow_application::ports::{HostnameResolver, IdentClient, ResultSink};
use identflow_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock HostnameResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostnameResolver {
    responses: Arc<RwLock<HashMap<String, String>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_hostname(&self, address: &str, hostname: &str) {
        self.responses
            .write()
            .await
            .insert(address.to_string(), hostname.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Number of lookups that reached the resolver (cache misses).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, address: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::DnsResolutionFailure(format!(
                "mock failure for {address}"
            )));
        }
        Ok(self.responses.read().await.get(address).cloned())
    }
}

// ============================================================================
// Mock IdentClient
// ============================================================================

#[derive(Clone, Default)]
pub struct MockIdentClient {
    username: Arc<RwLock<Option<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockIdentClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_username(&self, username: Option<&str>) {
        *self.username.write().await = username.map(str::to_string);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl IdentClient for MockIdentClient {
    async fn query_user(
        &self,
        address: &str,
        _remote_port: u16,
        _local_port: u16,
    ) -> Result<Option<String>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::IdentQueryFailure(format!(
                "mock connect failure for {address}"
            )));
        }
        Ok(self.username.read().await.clone())
    }
}

// ============================================================================
// Collecting ResultSink
// ============================================================================

#[derive(Clone, Default)]
pub struct CollectingSink {
    lines: Arc<RwLock<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }
}

#[async_trait]
impl ResultSink for CollectingSink {
    async fn emit(&self, line: &str) -> Result<(), DomainError> {
        self.lines.write().await.push(line.to_string());
        Ok(())
    }
}
