pub mod client;

pub use client::TcpIdentClient;
