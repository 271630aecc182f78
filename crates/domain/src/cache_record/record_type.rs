use std::fmt;
use std::str::FromStr;

/// Resource record types that may appear in a resolver cache dump.
///
/// Tokens are matched case-sensitively, exactly as the resolver prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    // Address records
    A,
    AAAA,

    // Basic records
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,

    // Service and naming records
    SRV,
    NAPTR,
    SVCB,
    HTTPS,
    DNAME,
    URI,

    // DNSSEC records
    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    CDS,
    CDNSKEY,

    // Security & cryptography
    CAA,
    TLSA,
    SSHFP,
    CERT,
    SMIMEA,
    IPSECKEY,
    OPENPGPKEY,

    // Zone integrity and sync
    ZONEMD,
    CSYNC,

    // Legacy/informational records
    SPF,
    LOC,
    HINFO,
    RP,
    AFSDB,
    KX,
    DHCID,
    EUI48,
    EUI64,
    NULL,
    WKS,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::DNAME => "DNAME",
            RecordType::URI => "URI",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::CERT => "CERT",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::CSYNC => "CSYNC",
            RecordType::SPF => "SPF",
            RecordType::LOC => "LOC",
            RecordType::HINFO => "HINFO",
            RecordType::RP => "RP",
            RecordType::AFSDB => "AFSDB",
            RecordType::KX => "KX",
            RecordType::DHCID => "DHCID",
            RecordType::EUI48 => "EUI48",
            RecordType::EUI64 => "EUI64",
            RecordType::NULL => "NULL",
            RecordType::WKS => "WKS",
        }
    }

    /// Address-bearing types, the only ones with a derived IP.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }

    pub fn is_signature(&self) -> bool {
        matches!(self, RecordType::RRSIG)
    }

    /// Returns all supported record types
    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::AAAA,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::SOA,
            RecordType::PTR,
            RecordType::MX,
            RecordType::TXT,
            RecordType::SRV,
            RecordType::NAPTR,
            RecordType::SVCB,
            RecordType::HTTPS,
            RecordType::DNAME,
            RecordType::URI,
            RecordType::DS,
            RecordType::DNSKEY,
            RecordType::RRSIG,
            RecordType::NSEC,
            RecordType::NSEC3,
            RecordType::NSEC3PARAM,
            RecordType::CDS,
            RecordType::CDNSKEY,
            RecordType::CAA,
            RecordType::TLSA,
            RecordType::SSHFP,
            RecordType::CERT,
            RecordType::SMIMEA,
            RecordType::IPSECKEY,
            RecordType::OPENPGPKEY,
            RecordType::ZONEMD,
            RecordType::CSYNC,
            RecordType::SPF,
            RecordType::LOC,
            RecordType::HINFO,
            RecordType::RP,
            RecordType::AFSDB,
            RecordType::KX,
            RecordType::DHCID,
            RecordType::EUI48,
            RecordType::EUI64,
            RecordType::NULL,
            RecordType::WKS,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::all()
            .iter()
            .copied()
            .find(|record_type| record_type.as_str() == s)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
