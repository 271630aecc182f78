use cachedump_application::ports::OutputSink;
use cachedump_domain::DomainError;
use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn write_all(&self, text: &str) -> Result<(), DomainError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| DomainError::OutputUnwritable {
                destination: self.describe(),
                reason: e.to_string(),
            })
    }
}
