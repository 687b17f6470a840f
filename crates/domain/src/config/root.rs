use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::ident::IdentConfig;
use super::logging::LoggingConfig;
use super::workers::WorkerConfig;

/// Main configuration, loaded from an optional TOML file with CLI overrides
/// applied on top. Every section has full serde defaults, so an absent file
/// (or an empty one) yields the reference configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub workers: WorkerConfig,

    #[serde(default)]
    pub ident: IdentConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides layered over the file configuration
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workers: Option<usize>,
    pub ident_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.to_string(),
                        source,
                    })?;
                toml::from_str(&contents)?
            }
            None => Config::default(),
        };

        if let Some(workers) = overrides.workers {
            config.workers.pool_size = workers;
        }
        if let Some(timeout) = overrides.ident_timeout_secs {
            config.ident.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers.pool_size == 0 {
            return Err(ConfigError::Invalid(
                "workers.pool_size must be at least 1".to_string(),
            ));
        }
        if self.ident.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "ident.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.dns.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "dns.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
