use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot read cache dump from {origin}: {reason}")]
    InputUnreadable { origin: String, reason: String },

    #[error("Malformed filter '{token}': {reason}")]
    MalformedFilter { token: String, reason: String },

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Cannot write output to {destination}: {reason}")]
    OutputUnwritable { destination: String, reason: String },
}

impl DomainError {
    pub fn malformed_filter(token: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::MalformedFilter {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
