//! In-memory copy of a resolver cache dump.
//!
//! - `parser`: line-oriented parsing of `dump_cache` output
//! - `merge`: combining two dumps, the fresher one winning per RRset

pub mod merge;
pub mod parser;

pub use merge::merge_records;
pub use parser::{parse_dump_line, parse_record_line, DumpLine, Section, EOF_MARKER};

use crate::cache_record::CacheRecord;
use crate::filter::CacheFilter;
use tracing::debug;

/// Ordered collection of cache records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDump {
    records: Vec<CacheRecord>,
}

impl CacheDump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CacheRecord>) -> Self {
        Self { records }
    }

    /// Parse dump text. Never fails: lines that are not records, rrset
    /// headers or section markers are skipped. Message cache entries are
    /// ignored and parsing stops at `EOF`.
    pub fn parse(text: &str) -> Self {
        let mut records = Vec::new();
        let mut current_rrset = None;
        let mut in_msg_cache = false;
        let mut skipped = 0usize;

        for line in text.lines() {
            match parse_dump_line(line) {
                Some(DumpLine::Eof) => break,
                Some(DumpLine::SectionStart(Section::MsgCache)) => in_msg_cache = true,
                Some(DumpLine::SectionEnd(Section::MsgCache)) => in_msg_cache = false,
                Some(DumpLine::SectionStart(Section::RrsetCache))
                | Some(DumpLine::SectionEnd(Section::RrsetCache)) => current_rrset = None,
                Some(_) if in_msg_cache => {}
                Some(DumpLine::RrsetHeader(meta)) => current_rrset = Some(meta),
                Some(DumpLine::Record(record)) => records.push(match current_rrset {
                    Some(meta) => record.with_rrset(meta),
                    None => record,
                }),
                None if in_msg_cache => {}
                None => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() && !trimmed.starts_with(';') {
                        skipped += 1;
                    }
                }
            }
        }

        debug!(records = records.len(), skipped, "Parsed cache dump");

        Self { records }
    }

    /// Merge `fresh` over `base`; see [`merge_records`].
    pub fn merge(base: CacheDump, fresh: CacheDump) -> CacheDump {
        CacheDump {
            records: merge_records(base.records, fresh.records),
        }
    }

    /// Records accepted by `filter`, in their original order.
    pub fn filter(&self, filter: &CacheFilter) -> CacheDump {
        CacheDump {
            records: filter.apply(&self.records),
        }
    }

    pub fn records(&self) -> &[CacheRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CacheRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
