use async_trait::async_trait;
use identflow_domain::DomainError;

/// Reverse DNS lookup seam.
///
/// `Ok(None)` means the lookup completed but produced no name (no PTR
/// record, or the address is not an IP literal); the caller falls back to
/// the raw address either way.
#[async_trait]
pub trait HostnameResolver: Send + Sync {
    async fn resolve_hostname(&self, address: &str) -> Result<Option<String>, DomainError>;
}
