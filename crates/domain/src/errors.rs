use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("DNS resolution failed: {0}")]
    DnsResolutionFailure(String),

    #[error("Ident query failed: {0}")]
    IdentQueryFailure(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
