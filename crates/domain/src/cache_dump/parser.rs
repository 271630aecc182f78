use crate::cache_record::{CacheRecord, RecordType, RrsetMeta};

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Sections of a resolver cache dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    RrsetCache,
    MsgCache,
}

impl Section {
    pub fn start_marker(&self) -> &'static str {
        match self {
            Section::RrsetCache => "START_RRSET_CACHE",
            Section::MsgCache => "START_MSG_CACHE",
        }
    }

    pub fn end_marker(&self) -> &'static str {
        match self {
            Section::RrsetCache => "END_RRSET_CACHE",
            Section::MsgCache => "END_MSG_CACHE",
        }
    }
}

pub const EOF_MARKER: &str = "EOF";

/// Intermediate line type produced by the line parser.
#[derive(Debug, Clone, PartialEq)]
pub enum DumpLine {
    SectionStart(Section),
    SectionEnd(Section),
    Eof,
    RrsetHeader(RrsetMeta),
    Record(CacheRecord),
}

/// Parse one line of a cache dump.
///
/// Supported lines:
/// - blank, `;comment`            → None
/// - `START_RRSET_CACHE` etc.     → SectionStart / SectionEnd
/// - `EOF`                        → Eof
/// - `;rrset 3600 1 0 8 3`        → RrsetHeader
/// - `name ttl class type rdata`  → Record
///
/// Anything else, including records with an unknown type token or a
/// non-numeric TTL, yields None.
pub fn parse_dump_line(line: &str) -> Option<DumpLine> {
    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    if line.starts_with(';') {
        return RrsetMeta::parse(line).map(DumpLine::RrsetHeader);
    }

    for section in [Section::RrsetCache, Section::MsgCache] {
        if line == section.start_marker() {
            return Some(DumpLine::SectionStart(section));
        }
        if line == section.end_marker() {
            return Some(DumpLine::SectionEnd(section));
        }
    }

    if line == EOF_MARKER {
        return Some(DumpLine::Eof);
    }

    parse_record_line(line).map(DumpLine::Record)
}

/// Parse `<name> <ttl> <class> <type> <rdata...>`. The rdata keeps its inner
/// spacing; only the surrounding whitespace is dropped.
pub fn parse_record_line(line: &str) -> Option<CacheRecord> {
    let (name, rest) = next_field(line)?;
    let (ttl, rest) = next_field(rest)?;
    let (rrclass, rest) = next_field(rest)?;
    let (record_type, rest) = next_field(rest)?;

    let rdata = rest.trim();
    if rdata.is_empty() {
        return None;
    }

    let ttl = ttl.parse::<u32>().ok()?;
    let record_type = record_type.parse::<RecordType>().ok()?;

    Some(CacheRecord::new(name, record_type, rrclass, ttl, rdata))
}

fn next_field(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}
