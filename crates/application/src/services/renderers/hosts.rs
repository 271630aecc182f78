use cachedump_domain::CacheRecord;

/// `<ip> <name>` for every A/AAAA record, trailing dot removed. Other
/// record types are skipped.
pub fn render_hosts(records: &[CacheRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if let Some(ip) = record.ip() {
            out.push_str(ip);
            out.push(' ');
            out.push_str(record.host_name());
            out.push('\n');
        }
    }
    out
}
