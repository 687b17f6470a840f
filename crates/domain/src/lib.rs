//! Identflow Domain Layer
pub mod config;
pub mod errors;
pub mod request;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use request::{ResolveRequest, Resolution};
