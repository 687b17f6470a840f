//! Identflow Application Layer
//!
//! Ports (trait seams to the network adapters), shared services (the host
//! cache and the request queue) and the resolution use case.

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::{HostnameResolver, IdentClient, ResultSink};
pub use services::{HostCache, RequestQueue};
pub use use_cases::ResolveConnectionUseCase;
