use async_trait::async_trait;
use hickory_resolver::{Resolver, TokioResolver};
use identflow_application::ports::HostnameResolver;
use identflow_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Reverse DNS adapter: PTR lookup through the system resolver
/// configuration, bounded by a fixed timeout. The first returned name wins,
/// matching the reference behavior of taking the resolver's first answer.
pub struct PtrHostnameResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl PtrHostnameResolver {
    /// Builds a resolver from the system configuration (/etc/resolv.conf on
    /// Unix) with the given per-lookup timeout.
    pub fn from_system_conf(timeout_secs: u64) -> Result<Self, DomainError> {
        let resolver = Resolver::builder_tokio()
            .map_err(|e| DomainError::DnsResolutionFailure(e.to_string()))?
            .build();
        Ok(Self {
            resolver,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[async_trait]
impl HostnameResolver for PtrHostnameResolver {
    async fn resolve_hostname(&self, address: &str) -> Result<Option<String>, DomainError> {
        let ip: IpAddr = match address.parse() {
            Ok(ip) => ip,
            Err(_) => {
                debug!(address, "not an IP literal, skipping PTR lookup");
                return Ok(None);
            }
        };

        let lookup = timeout(self.timeout, self.resolver.reverse_lookup(ip))
            .await
            .map_err(|_| {
                DomainError::DnsResolutionFailure(format!("PTR lookup for {address} timed out"))
            })?
            .map_err(|e| DomainError::DnsResolutionFailure(e.to_string()))?;

        let hostname = lookup
            .iter()
            .next()
            .map(|ptr| ptr.to_string().trim_end_matches('.').to_string());

        debug!(address, hostname = ?hostname, "PTR lookup completed");
        Ok(hostname)
    }
}
