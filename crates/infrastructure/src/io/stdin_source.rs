use cachedump_application::ports::DumpSource;
use cachedump_domain::DomainError;
use std::io::{self, Read};

/// Dump piped in on standard input (`-r`), typically straight from
/// `unbound-control dump_cache`.
#[derive(Debug, Default)]
pub struct StdinDumpSource;

impl StdinDumpSource {
    pub fn new() -> Self {
        Self
    }
}

impl DumpSource for StdinDumpSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_to_string(&self) -> Result<String, DomainError> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| DomainError::InputUnreadable {
                origin: self.describe(),
                reason: e.to_string(),
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
