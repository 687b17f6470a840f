//! Configuration module for Identflow
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `workers`: Resolver worker pool sizing
//! - `ident`: RFC 1413 ident query settings
//! - `dns`: Reverse DNS settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod ident;
pub mod logging;
pub mod root;
pub mod workers;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use ident::IdentConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use workers::WorkerConfig;
