pub mod resolve_connection;

pub use resolve_connection::ResolveConnectionUseCase;
