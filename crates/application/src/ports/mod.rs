pub mod dump_source;
pub mod output_sink;

pub use dump_source::DumpSource;
pub use output_sink::OutputSink;
