use async_trait::async_trait;
use identflow_domain::DomainError;

/// RFC 1413 ident query seam.
///
/// `Ok(None)` covers protocol-level misses (non-`USERID` status, empty user
/// id); `Err` covers transport failures (connect, timeout, read). The use
/// case treats both as the remote-port fallback.
#[async_trait]
pub trait IdentClient: Send + Sync {
    async fn query_user(
        &self,
        address: &str,
        remote_port: u16,
        local_port: u16,
    ) -> Result<Option<String>, DomainError>;
}
