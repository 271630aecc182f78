use cachedump_application::ports::DumpSource;
use cachedump_domain::DomainError;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Saved cache dump on disk (`-l`).
pub struct FileDumpSource {
    path: PathBuf,
}

impl FileDumpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DumpSource for FileDumpSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> Result<String, DomainError> {
        let bytes = fs::read(&self.path).map_err(|e| DomainError::InputUnreadable {
            origin: self.describe(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Read dump file");

        // Names in a dump are not guaranteed to be valid UTF-8
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
