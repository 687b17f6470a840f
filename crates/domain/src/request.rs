use crate::DomainError;
use std::fmt;
use std::sync::Arc;

/// Identification request for one connection.
/// Parsed from the wire form `address(remotePort,localPort)`.
/// Uses `Arc<str>` for zero-cost cloning across queue → resolver → cache layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub address: Arc<str>,
    pub remote_port: u16,
    pub local_port: u16,
}

impl ResolveRequest {
    pub fn new(address: impl Into<Arc<str>>, remote_port: u16, local_port: u16) -> Self {
        Self {
            address: address.into(),
            remote_port,
            local_port,
        }
    }

    /// Parses one request line. Any missing delimiter, trailing garbage, or
    /// non-integer port makes the whole line malformed.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedRequest(line.to_string());

        let (address, rest) = line.split_once('(').ok_or_else(malformed)?;
        if address.is_empty() {
            return Err(malformed());
        }
        let (ports, tail) = rest.split_once(')').ok_or_else(malformed)?;
        if !tail.is_empty() {
            return Err(malformed());
        }
        let (remote, local) = ports.split_once(',').ok_or_else(malformed)?;
        let remote_port: u16 = remote.trim().parse().map_err(|_| malformed())?;
        let local_port: u16 = local.trim().parse().map_err(|_| malformed())?;

        Ok(Self::new(address, remote_port, local_port))
    }
}

impl fmt::Display for ResolveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.address, self.remote_port, self.local_port)
    }
}

/// Outcome of resolving one request. `Display` renders the single output
/// line the caller consumes: `address(remotePort):hostname(username)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: Arc<str>,
    pub remote_port: u16,
    pub hostname: String,
    pub username: String,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}):{}({})",
            self.address, self.remote_port, self.hostname, self.username
        )
    }
}
