use async_trait::async_trait;
use identflow_application::ports::ResultSink;
use identflow_domain::DomainError;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Stdout adapter. The writer lock is held across the line, the newline and
/// the flush, so concurrent workers never interleave mid-line. Stdout
/// carries only result lines; diagnostics go to stderr via tracing.
pub struct StdoutSink {
    writer: Mutex<Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultSink for StdoutSink {
    async fn emit(&self, line: &str) -> Result<(), DomainError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
