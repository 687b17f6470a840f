//! Identflow Runtime Layer
//!
//! Orchestration around the shared request queue: the dispatcher that feeds
//! it from the input stream and the worker pool that drains it.

pub mod dispatcher;
pub mod pool;

pub use pool::ResolverWorkerPool;
