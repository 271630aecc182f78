use cachedump_domain::DomainError;

/// Destination for rendered output.
pub trait OutputSink: Send + Sync {
    fn describe(&self) -> String;

    /// Write the complete rendered text. Failures map to
    /// `DomainError::OutputUnwritable`.
    fn write_all(&self, text: &str) -> Result<(), DomainError>;
}
