use serde::{Deserialize, Serialize};

/// Reverse DNS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Timeout for a single PTR lookup, in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}
