//! Identflow Infrastructure Layer
//!
//! Network adapters behind the application ports: reverse DNS via
//! hickory-resolver, the RFC 1413 TCP client, and the stdout sink.

pub mod dns;
pub mod ident;
pub mod output;

pub use dns::PtrHostnameResolver;
pub use ident::TcpIdentClient;
pub use output::StdoutSink;
