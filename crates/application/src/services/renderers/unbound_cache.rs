use cachedump_domain::cache_dump::{Section, EOF_MARKER};
use cachedump_domain::{CacheRecord, RecordKey, RrsetMeta};
use rustc_hash::FxHashMap;

/// Render records in the shape `unbound-control load_cache` reads back.
///
/// Records are grouped into RRsets by key, in first-seen order. Each group
/// gets a fresh `;rrset` header: TTL is the group minimum, counts are
/// recomputed, trust and security come from the header the first record
/// was parsed under (`0 0` when there was none). Signatures follow the data
/// records of their set. The message cache section is always empty.
pub fn render_unbound_cache(records: &[CacheRecord], ttl_override: Option<u32>) -> String {
    let mut out = String::new();
    push_line(&mut out, Section::RrsetCache.start_marker());

    for group in group_rrsets(records) {
        let (data, signatures): (Vec<&CacheRecord>, Vec<&CacheRecord>) = group
            .into_iter()
            .partition(|record| !record.record_type().is_signature());

        let header = rrset_header(&data, &signatures, ttl_override);
        push_line(&mut out, &header.to_string());

        for record in data.iter().chain(signatures.iter()) {
            let ttl = ttl_override.unwrap_or(record.ttl());
            push_line(&mut out, &record.dump_line_with_ttl(ttl));
        }
    }

    push_line(&mut out, Section::RrsetCache.end_marker());
    push_line(&mut out, Section::MsgCache.start_marker());
    push_line(&mut out, Section::MsgCache.end_marker());
    push_line(&mut out, EOF_MARKER);
    out
}

fn group_rrsets(records: &[CacheRecord]) -> Vec<Vec<&CacheRecord>> {
    let mut index: FxHashMap<RecordKey, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<&CacheRecord>> = Vec::new();

    for record in records {
        let slot = *index.entry(record.key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    groups
}

fn rrset_header(
    data: &[&CacheRecord],
    signatures: &[&CacheRecord],
    ttl_override: Option<u32>,
) -> RrsetMeta {
    let first_meta = data
        .iter()
        .chain(signatures.iter())
        .find_map(|record| record.rrset())
        .copied()
        .unwrap_or_default();

    let min_ttl = data
        .iter()
        .chain(signatures.iter())
        .map(|record| record.ttl())
        .min()
        .unwrap_or(0);

    RrsetMeta {
        ttl: ttl_override.unwrap_or(min_ttl),
        rr_count: data.len() as u32,
        rrsig_count: signatures.len() as u32,
        trust: first_meta.trust,
        security: first_meta.security,
        nsec_apex: first_meta.nsec_apex,
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
