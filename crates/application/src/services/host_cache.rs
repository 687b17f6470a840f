use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-lifetime memoization of reverse DNS results, keyed by the
/// textual address. Entries are never evicted. Only successful lookups are
/// inserted, so a failed lookup is retried on the next request for the same
/// address. Two workers racing on an uncached address may both resolve and
/// both insert; last write wins and the map stays consistent.
#[derive(Default)]
pub struct HostCache {
    entries: DashMap<Arc<str>, Arc<str>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl HostCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &str) -> Option<Arc<str>> {
        match self.entries.get(address) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, address: Arc<str>, hostname: impl Into<Arc<str>>) {
        self.entries.insert(address, hostname.into());
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
