use serde::{Deserialize, Serialize};

/// Ident (RFC 1413) query configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentConfig {
    /// TCP port of the remote ident service (default: 113)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout covering connect, write and read, in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for IdentConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    113
}

fn default_timeout_secs() -> u64 {
    30
}
