use super::{RecordType, RrsetMeta};
use std::fmt;

/// One resource record as it appeared in a resolver cache dump.
///
/// Records are immutable once parsed. The parsed `;rrset` header is carried
/// along so that a re-rendered dump keeps the resolver's trust and security
/// status, but it takes no part in equality.
#[derive(Debug, Clone)]
pub struct CacheRecord {
    name: String,
    record_type: RecordType,
    rrclass: String,
    ttl: u32,
    rdata: String,
    rrset: Option<RrsetMeta>,
}

/// Identity of an RRset inside a cache: owner name, type and class.
///
/// Signatures are keyed by the type they cover, so an RRSIG belongs to the
/// same RRset as the records it signs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub name: String,
    pub record_type: RecordType,
    pub rrclass: String,
}

impl CacheRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        rrclass: impl Into<String>,
        ttl: u32,
        rdata: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            rrclass: rrclass.into(),
            ttl,
            rdata: rdata.into(),
            rrset: None,
        }
    }

    pub fn with_rrset(mut self, rrset: RrsetMeta) -> Self {
        self.rrset = Some(rrset);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn rrclass(&self) -> &str {
        &self.rrclass
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rdata(&self) -> &str {
        &self.rdata
    }

    pub fn rrset(&self) -> Option<&RrsetMeta> {
        self.rrset.as_ref()
    }

    /// Address portion of the record data, for A and AAAA records only.
    pub fn ip(&self) -> Option<&str> {
        if self.record_type.is_address() {
            Some(self.rdata.trim())
        } else {
            None
        }
    }

    /// Owner name without the trailing root dot, as used in hosts files.
    pub fn host_name(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }

    /// For RRSIG records, the type covered by the signature.
    pub fn covered_type(&self) -> Option<RecordType> {
        if !self.record_type.is_signature() {
            return None;
        }
        self.rdata.split_whitespace().next()?.parse().ok()
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            record_type: self.covered_type().unwrap_or(self.record_type),
            rrclass: self.rrclass.clone(),
        }
    }

    /// Record line in the dump shape, tab separated.
    pub fn to_dump_line(&self) -> String {
        self.dump_line_with_ttl(self.ttl)
    }

    pub fn dump_line_with_ttl(&self, ttl: u32) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.name, ttl, self.rrclass, self.record_type, self.rdata
        )
    }
}

impl PartialEq for CacheRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.record_type == other.record_type
            && self.rrclass == other.rrclass
            && self.ttl == other.ttl
            && self.rdata == other.rdata
    }
}

impl Eq for CacheRecord {}

impl fmt::Display for CacheRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.rrclass, self.record_type, self.rdata
        )
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.rrclass, self.record_type)
    }
}
