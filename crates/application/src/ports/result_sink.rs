use async_trait::async_trait;
use identflow_domain::DomainError;

/// Output seam for resolved result lines.
///
/// One call emits one whole line; implementations must not interleave
/// concurrent emissions mid-line.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn emit(&self, line: &str) -> Result<(), DomainError>;
}
