use cachedump_domain::DomainError;

/// Somewhere a raw cache dump can be read from.
///
/// Implementations read the whole dump in one go; the parser works on the
/// complete text.
pub trait DumpSource: Send + Sync {
    /// Human readable origin, used in log lines and error messages.
    fn describe(&self) -> String;

    /// Read the full dump. Failures map to `DomainError::InputUnreadable`.
    fn read_to_string(&self) -> Result<String, DomainError>;
}
