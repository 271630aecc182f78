use cachedump_domain::{CacheDump, CacheFilter, DomainError, OutputFormat};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::OutputSink;
use crate::services::renderers::{render, RenderOptions};

/// Counts reported after an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub total: usize,
    pub selected: usize,
    pub lines: usize,
}

pub struct ExportCacheUseCase {
    sink: Arc<dyn OutputSink>,
    options: RenderOptions,
}

impl ExportCacheUseCase {
    pub fn new(sink: Arc<dyn OutputSink>, options: RenderOptions) -> Self {
        Self { sink, options }
    }

    /// Filter `dump`, render the selection as `format` and write it out.
    #[instrument(skip(self, dump, filter), fields(format = %format))]
    pub fn execute(
        &self,
        dump: &CacheDump,
        filter: &CacheFilter,
        format: OutputFormat,
    ) -> Result<ExportSummary, DomainError> {
        if let Some(expr) = filter.expr() {
            debug!(filter = %expr, "Applying record filter");
        }

        let selected = dump.filter(filter);
        let text = render(format, selected.records(), &self.options);
        self.sink.write_all(&text)?;

        let summary = ExportSummary {
            total: dump.len(),
            selected: selected.len(),
            lines: text.lines().count(),
        };

        info!(
            total = summary.total,
            selected = summary.selected,
            lines = summary.lines,
            destination = %self.sink.describe(),
            "Cache exported"
        );

        Ok(summary)
    }
}
