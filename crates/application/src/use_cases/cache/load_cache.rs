use cachedump_domain::{CacheDump, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::DumpSource;

/// Reads the base dump and the optional fresher dump, then merges them with
/// the fresher one winning per RRset.
///
/// Every source is read before anything is parsed, so an unreadable input
/// aborts the run without partial work.
pub struct LoadCacheUseCase {
    base: Option<Arc<dyn DumpSource>>,
    fresh: Option<Arc<dyn DumpSource>>,
}

impl LoadCacheUseCase {
    pub fn new(base: Option<Arc<dyn DumpSource>>, fresh: Option<Arc<dyn DumpSource>>) -> Self {
        Self { base, fresh }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) -> Result<CacheDump, DomainError> {
        if self.base.is_none() && self.fresh.is_none() {
            warn!("No cache dump source given, continuing with an empty cache");
            return Ok(CacheDump::new());
        }

        let base_text = self.base.as_ref().map(read_source).transpose()?;
        let fresh_text = self.fresh.as_ref().map(read_source).transpose()?;

        let base = base_text
            .map(|text| CacheDump::parse(&text))
            .unwrap_or_default();
        let fresh = fresh_text
            .map(|text| CacheDump::parse(&text))
            .unwrap_or_default();

        let dump = if fresh.is_empty() {
            base
        } else if base.is_empty() {
            fresh
        } else {
            CacheDump::merge(base, fresh)
        };

        info!(records = dump.len(), "Cache dump loaded");

        Ok(dump)
    }
}

fn read_source(source: &Arc<dyn DumpSource>) -> Result<String, DomainError> {
    let text = source.read_to_string()?;

    if text.trim().is_empty() {
        warn!(source = %source.describe(), "Cache dump source is empty");
    } else {
        debug!(source = %source.describe(), bytes = text.len(), "Read cache dump");
    }

    Ok(text)
}
