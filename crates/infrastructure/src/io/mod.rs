//! Adapters between the ports and the process's files and standard streams.

pub mod file_sink;
pub mod file_source;
pub mod stdin_source;
pub mod stdout_sink;

pub use file_sink::FileOutputSink;
pub use file_source::FileDumpSource;
pub use stdin_source::StdinDumpSource;
pub use stdout_sink::StdoutSink;
