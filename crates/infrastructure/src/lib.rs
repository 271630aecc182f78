//! cachedump Infrastructure Layer
pub mod io;

pub use io::{FileDumpSource, FileOutputSink, StdinDumpSource, StdoutSink};
