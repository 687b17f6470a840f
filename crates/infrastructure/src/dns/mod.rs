pub mod ptr_resolver;

pub use ptr_resolver::PtrHostnameResolver;
