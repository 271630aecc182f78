//! cachedump Domain Layer
pub mod cache_dump;
pub mod cache_record;
pub mod config;
pub mod errors;
pub mod filter;
pub mod output_format;

pub use cache_dump::CacheDump;
pub use cache_record::{CacheRecord, RecordKey, RecordType, RrsetMeta};
pub use config::{CliOverrides, Config, ConfigError, LocalStyle, OutputConfig};
pub use errors::DomainError;
pub use filter::{CacheFilter, FilterExpr, Predicate};
pub use output_format::OutputFormat;
