use serde::{Deserialize, Serialize};

/// Resolver worker pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkerConfig {
    /// Number of concurrent resolver workers (default: 8)
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
        }
    }
}

fn default_pool_size() -> usize {
    8
}
