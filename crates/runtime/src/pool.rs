use identflow_application::ports::ResultSink;
use identflow_application::{RequestQueue, ResolveConnectionUseCase};
use identflow_domain::ResolveRequest;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Fixed pool of symmetric resolver workers, each looping
/// dequeue → parse → resolve → emit.
///
/// No per-request outcome can break a worker loop: malformed lines are
/// dropped at debug level and every lookup failure has already decayed to a
/// fallback inside the use case. Workers stop only through the cancellation
/// token.
///
/// # Example
///
/// ```rust,ignore
/// Arc::new(ResolverWorkerPool::new(queue, resolve, sink)
///     .with_pool_size(config.workers.pool_size)
///     .with_cancellation(shutdown.clone()))
///     .start();
/// ```
pub struct ResolverWorkerPool {
    queue: Arc<RequestQueue>,
    resolve: Arc<ResolveConnectionUseCase>,
    sink: Arc<dyn ResultSink>,
    pool_size: usize,
    shutdown: CancellationToken,
}

impl ResolverWorkerPool {
    pub fn new(
        queue: Arc<RequestQueue>,
        resolve: Arc<ResolveConnectionUseCase>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            queue,
            resolve,
            sink,
            pool_size: 8,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the worker tasks and returns immediately.
    pub fn start(self: Arc<Self>) {
        info!(workers = self.pool_size, "starting resolver worker pool");

        for worker_id in 0..self.pool_size {
            let pool = Arc::clone(&self);
            let shutdown = self.shutdown.clone();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = shutdown.cancelled() => {
                            debug!(worker_id, "resolver worker shutting down");
                            break;
                        }
                        line = pool.queue.dequeue() => {
                            pool.handle_line(worker_id, &line).await;
                        }
                    }
                }
            });
        }
    }

    async fn handle_line(&self, worker_id: usize, line: &str) {
        let request = match ResolveRequest::parse(line) {
            Ok(request) => request,
            Err(error) => {
                debug!(worker_id, line, %error, "discarding malformed request");
                return;
            }
        };

        let resolution = self.resolve.execute(&request).await;
        if let Err(error) = self.sink.emit(&resolution.to_string()).await {
            warn!(worker_id, %error, "failed to emit resolution");
        }
    }
}
