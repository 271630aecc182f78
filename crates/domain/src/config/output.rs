use serde::{Deserialize, Serialize};

/// How `unbound_local` and `unbound_local_remove` lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalStyle {
    /// `local-data: "..."` server configuration directives
    #[default]
    Config,
    /// `unbound-control local_data "..."` command lines
    Control,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when `-p` is not given (default: "unbound_cache")
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub local_style: LocalStyle,

    /// Fixed TTL written by `unbound_cache` instead of each record's own TTL
    #[serde(default)]
    pub cache_ttl: Option<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            local_style: LocalStyle::default(),
            cache_ttl: None,
        }
    }
}

fn default_format() -> String {
    "unbound_cache".to_string()
}
