#![allow(dead_code)]
use cachedump_domain::{CacheRecord, RecordType, RrsetMeta};

pub struct CacheRecordBuilder {
    name: String,
    record_type: RecordType,
    rrclass: String,
    ttl: u32,
    rdata: String,
    rrset: Option<RrsetMeta>,
}

impl CacheRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: RecordType::A,
            rrclass: "IN".to_string(),
            ttl: 300,
            rdata: "192.0.2.1".to_string(),
            rrset: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn rrclass(mut self, rrclass: &str) -> Self {
        self.rrclass = rrclass.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn rdata(mut self, rdata: &str) -> Self {
        self.rdata = rdata.to_string();
        self
    }

    pub fn rrset(mut self, rrset: RrsetMeta) -> Self {
        self.rrset = Some(rrset);
        self
    }

    pub fn build(self) -> CacheRecord {
        let record = CacheRecord::new(
            self.name,
            self.record_type,
            self.rrclass,
            self.ttl,
            self.rdata,
        );
        match self.rrset {
            Some(meta) => record.with_rrset(meta),
            None => record,
        }
    }
}

pub fn a(name: &str, ip: &str) -> CacheRecord {
    CacheRecordBuilder::new().name(name).rdata(ip).build()
}

pub fn aaaa(name: &str, ip: &str) -> CacheRecord {
    CacheRecordBuilder::new()
        .name(name)
        .record_type(RecordType::AAAA)
        .rdata(ip)
        .build()
}

pub fn mx(name: &str, exchange: &str) -> CacheRecord {
    CacheRecordBuilder::new()
        .name(name)
        .record_type(RecordType::MX)
        .rdata(&format!("10 {}", exchange))
        .build()
}

pub fn ns(name: &str, server: &str) -> CacheRecord {
    CacheRecordBuilder::new()
        .name(name)
        .record_type(RecordType::NS)
        .rdata(server)
        .build()
}

/// A small dump as printed by `unbound-control dump_cache`
pub const SAMPLE_DUMP: &str = "START_RRSET_CACHE
;rrset 86395 2 0 8 3
example.com.\t86395\tIN\tA\t93.184.216.34
example.com.\t86395\tIN\tA\t93.184.216.35
;rrset 3600 1 1 8 2
example.com.\t3600\tIN\tMX\t10 mail.example.com.
example.com.\t3600\tIN\tRRSIG\tMX 13 2 3600 20261101000000 20261011000000 12345 example.com. c2lnbmF0dXJl
;rrset nsec_apex 7200 1 0 4 0
example.com.\t7200\tIN\tNS\ta.iana-servers.net.
;rrset 300 1 0 5 0
www.example.com.\t300\tIN\tAAAA\t2606:2800:220:1:248:1893:25c8:1946
END_RRSET_CACHE
START_MSG_CACHE
msg example.com. IN A 33152 1 86395 3 1 0 0
example.com. IN A 0
END_MSG_CACHE
EOF
";
