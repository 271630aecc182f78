//! Wiring of adapters into use cases.

use cachedump_application::ports::{DumpSource, OutputSink};
use cachedump_application::{ExportCacheUseCase, LoadCacheUseCase, RenderOptions};
use cachedump_domain::Config;
use cachedump_infrastructure::{FileDumpSource, FileOutputSink, StdinDumpSource, StdoutSink};
use std::path::PathBuf;
use std::sync::Arc;

/// Where input comes from and where output goes, as given on the command line.
#[derive(Debug, Default)]
pub struct IoPaths {
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub read_stdin: bool,
}

pub struct UseCases {
    pub load_cache: LoadCacheUseCase,
    pub export_cache: ExportCacheUseCase,
}

impl UseCases {
    pub fn new(paths: &IoPaths, config: &Config) -> Self {
        let base: Option<Arc<dyn DumpSource>> = paths
            .load
            .as_ref()
            .map(|path| Arc::new(FileDumpSource::new(path)) as Arc<dyn DumpSource>);

        let fresh: Option<Arc<dyn DumpSource>> = if paths.read_stdin {
            Some(Arc::new(StdinDumpSource::new()))
        } else {
            None
        };

        let sink: Arc<dyn OutputSink> = match &paths.save {
            Some(path) => Arc::new(FileOutputSink::new(path)),
            None => Arc::new(StdoutSink::new()),
        };

        Self {
            load_cache: LoadCacheUseCase::new(base, fresh),
            export_cache: ExportCacheUseCase::new(sink, RenderOptions::from(&config.output)),
        }
    }
}
