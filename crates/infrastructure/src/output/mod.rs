pub mod stdout_sink;

pub use stdout_sink::StdoutSink;
