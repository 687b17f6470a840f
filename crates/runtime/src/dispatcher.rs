use identflow_application::RequestQueue;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// Line that stops the dispatcher; end-of-stream is equivalent.
pub const SENTINEL: &str = "QUIT";

/// Feeds the request queue from a line-oriented input stream until the
/// sentinel, end-of-stream, or a read error. Every other line is enqueued
/// verbatim; validation happens in the workers. Returns when the stream is
/// done; in-flight resolutions are abandoned by the caller exiting.
pub async fn run<R>(input: R, queue: Arc<RequestQueue>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line == SENTINEL {
                    info!("sentinel received, stopping dispatcher");
                    break;
                }
                queue.enqueue(line).await;
            }
            Ok(None) => {
                info!("input stream closed, stopping dispatcher");
                break;
            }
            Err(error) => {
                warn!(%error, "input stream error, stopping dispatcher");
                break;
            }
        }
    }
}
