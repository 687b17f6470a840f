use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};

/// Unbounded FIFO of pending request lines, shared between the dispatcher
/// and the resolver workers. `enqueue` never blocks; `dequeue` parks until
/// an item is available and delivers each item to exactly one caller.
///
/// The reference behavior drained the queue LIFO (an artifact of removing
/// from the append end); FIFO is used here for fairer latency under load.
#[derive(Default)]
pub struct RequestQueue {
    items: Mutex<VecDeque<String>>,
    available: Notify,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enqueue(&self, line: impl Into<String>) {
        self.items.lock().await.push_back(line.into());
        self.available.notify_one();
    }

    /// Removes and returns the oldest item, waiting if the queue is empty.
    pub async fn dequeue(&self) -> String {
        loop {
            let notified = self.available.notified();
            {
                let mut items = self.items.lock().await;
                if let Some(line) = items.pop_front() {
                    if !items.is_empty() {
                        // Notify's single stored permit can collapse a burst
                        // of enqueues; pass the wakeup on to the next waiter.
                        self.available.notify_one();
                    }
                    return line;
                }
            }
            notified.await;
        }
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}
