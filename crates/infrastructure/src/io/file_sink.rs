use cachedump_application::ports::OutputSink;
use cachedump_domain::DomainError;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Rendered output written to a file (`-s`). The file is created or
/// truncated.
pub struct FileOutputSink {
    path: PathBuf,
}

impl FileOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileOutputSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write_all(&self, text: &str) -> Result<(), DomainError> {
        fs::write(&self.path, text).map_err(|e| DomainError::OutputUnwritable {
            destination: self.describe(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), bytes = text.len(), "Wrote output file");
        Ok(())
    }
}
