use crate::ports::{HostnameResolver, IdentClient};
use crate::services::HostCache;
use identflow_domain::{Resolution, ResolveRequest};
use std::sync::Arc;
use tracing::debug;

/// Use case: resolve one identification request to a hostname and a remote
/// username. Infallible: every lookup failure decays to a fallback field
/// value, never to an error. The two lookups are independent.
pub struct ResolveConnectionUseCase {
    hostname_resolver: Arc<dyn HostnameResolver>,
    ident_client: Arc<dyn IdentClient>,
    cache: Arc<HostCache>,
}

impl ResolveConnectionUseCase {
    pub fn new(
        hostname_resolver: Arc<dyn HostnameResolver>,
        ident_client: Arc<dyn IdentClient>,
        cache: Arc<HostCache>,
    ) -> Self {
        Self {
            hostname_resolver,
            ident_client,
            cache,
        }
    }

    pub async fn execute(&self, request: &ResolveRequest) -> Resolution {
        let hostname = self.lookup_hostname(&request.address).await;
        let username = self.lookup_username(request).await;

        Resolution {
            address: Arc::clone(&request.address),
            remote_port: request.remote_port,
            hostname,
            username,
        }
    }

    /// Cached reverse lookup. Successful resolutions are memoized for the
    /// process lifetime; failures fall back to the raw address and are not
    /// cached, so the next request for the same address retries.
    async fn lookup_hostname(&self, address: &Arc<str>) -> String {
        if let Some(hostname) = self.cache.get(address) {
            return hostname.to_string();
        }

        match self.hostname_resolver.resolve_hostname(address).await {
            Ok(Some(hostname)) => {
                self.cache.insert(Arc::clone(address), hostname.as_str());
                hostname
            }
            Ok(None) => {
                debug!(address = %address, "no PTR record, falling back to address");
                address.to_string()
            }
            Err(error) => {
                debug!(address = %address, %error, "reverse lookup failed, falling back to address");
                address.to_string()
            }
        }
    }

    async fn lookup_username(&self, request: &ResolveRequest) -> String {
        match self
            .ident_client
            .query_user(&request.address, request.remote_port, request.local_port)
            .await
        {
            Ok(Some(username)) => username,
            Ok(None) => {
                debug!(address = %request.address, "ident response without user id, falling back to port");
                request.remote_port.to_string()
            }
            Err(error) => {
                debug!(address = %request.address, %error, "ident query failed, falling back to port");
                request.remote_port.to_string()
            }
        }
    }
}
