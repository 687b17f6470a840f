pub mod hostname_resolver;
pub mod ident_client;
pub mod result_sink;

pub use hostname_resolver::HostnameResolver;
pub use ident_client::IdentClient;
pub use result_sink::ResultSink;
