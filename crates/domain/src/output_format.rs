use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Output formats a filtered cache can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `<ip> <name>` lines for A/AAAA records
    Hosts,
    /// The resolver's cache dump format, loadable with `load_cache`
    UnboundCache,
    /// `local-data` directives, one per record
    UnboundLocal,
    /// Local data removal directives, one per distinct name
    UnboundLocalRemove,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Hosts => "hosts",
            OutputFormat::UnboundCache => "unbound_cache",
            OutputFormat::UnboundLocal => "unbound_local",
            OutputFormat::UnboundLocalRemove => "unbound_local_remove",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Hosts,
            OutputFormat::UnboundCache,
            OutputFormat::UnboundLocal,
            OutputFormat::UnboundLocalRemove,
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hosts" => Ok(OutputFormat::Hosts),
            "unbound_cache" => Ok(OutputFormat::UnboundCache),
            "unbound_local" => Ok(OutputFormat::UnboundLocal),
            "unbound_local_remove" => Ok(OutputFormat::UnboundLocalRemove),
            other => Err(DomainError::UnknownFormat(other.to_string())),
        }
    }
}
