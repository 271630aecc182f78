//! Text renderers for a filtered record set.
//!
//! Each renderer is a pure function from records to text. Every emitted
//! line, including the last one, ends with `\n`.

pub mod hosts;
pub mod unbound_cache;
pub mod unbound_local;

pub use hosts::render_hosts;
pub use unbound_cache::render_unbound_cache;
pub use unbound_local::{render_local_data, render_local_data_remove};

use cachedump_domain::{CacheRecord, LocalStyle, OutputConfig, OutputFormat};

/// Knobs that change how records are rendered, taken from `[output]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub local_style: LocalStyle,
    /// Replaces every TTL written by the `unbound_cache` renderer
    pub cache_ttl: Option<u32>,
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            local_style: config.local_style,
            cache_ttl: config.cache_ttl,
        }
    }
}

pub fn render(format: OutputFormat, records: &[CacheRecord], options: &RenderOptions) -> String {
    match format {
        OutputFormat::Hosts => render_hosts(records),
        OutputFormat::UnboundCache => render_unbound_cache(records, options.cache_ttl),
        OutputFormat::UnboundLocal => render_local_data(records, options.local_style),
        OutputFormat::UnboundLocalRemove => {
            render_local_data_remove(records, options.local_style)
        }
    }
}
