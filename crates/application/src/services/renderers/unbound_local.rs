use cachedump_domain::{CacheRecord, LocalStyle};
use rustc_hash::FxHashSet;

const LOCAL_DATA: &str = "local-data:";
const LOCAL_DATA_REMOVE: &str = "local-data-remove:";
const CONTROL_LOCAL_DATA: &str = "unbound-control local_data";
const CONTROL_LOCAL_DATA_REMOVE: &str = "unbound-control local_data_remove";

/// One local data entry per record, as `name ttl class type rdata`.
pub fn render_local_data(records: &[CacheRecord], style: LocalStyle) -> String {
    let directive = match style {
        LocalStyle::Config => LOCAL_DATA,
        LocalStyle::Control => CONTROL_LOCAL_DATA,
    };

    let mut out = String::new();
    for record in records {
        out.push_str(directive);
        out.push(' ');
        out.push_str(&quote(&record.to_string()));
        out.push('\n');
    }
    out
}

/// One removal entry per distinct owner name, in first-seen order.
pub fn render_local_data_remove(records: &[CacheRecord], style: LocalStyle) -> String {
    let directive = match style {
        LocalStyle::Config => LOCAL_DATA_REMOVE,
        LocalStyle::Control => CONTROL_LOCAL_DATA_REMOVE,
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = String::new();
    for record in records {
        if !seen.insert(record.name()) {
            continue;
        }
        out.push_str(directive);
        out.push(' ');
        out.push_str(&quote(record.name()));
        out.push('\n');
    }
    out
}

// TXT data carries its own double quotes; fall back to single quotes then.
fn quote(text: &str) -> String {
    if text.contains('"') {
        format!("'{}'", text)
    } else {
        format!("\"{}\"", text)
    }
}
