pub mod host_cache;
pub mod request_queue;

pub use host_cache::{CacheStats, HostCache};
pub use request_queue::RequestQueue;
