use std::fmt;

const RRSET_PREFIX: &str = ";rrset";
const NSEC_APEX_FLAG: &str = "nsec_apex";

/// Metadata from the `;rrset` header line that precedes every RRset in a
/// resolver cache dump.
///
/// ```text
/// ;rrset [nsec_apex] <ttl> <rr_count> <rrsig_count> <trust> <security>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RrsetMeta {
    pub ttl: u32,
    pub rr_count: u32,
    pub rrsig_count: u32,
    pub trust: u8,
    pub security: u8,
    pub nsec_apex: bool,
}

impl RrsetMeta {
    /// Parse a `;rrset` header. Returns `None` for any other line, including
    /// headers with missing or non-numeric fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        if fields.next()? != RRSET_PREFIX {
            return None;
        }

        let mut first = fields.next()?;
        let nsec_apex = first == NSEC_APEX_FLAG;
        if nsec_apex {
            first = fields.next()?;
        }

        let meta = RrsetMeta {
            ttl: first.parse().ok()?,
            rr_count: fields.next()?.parse().ok()?,
            rrsig_count: fields.next()?.parse().ok()?,
            trust: fields.next()?.parse().ok()?,
            security: fields.next()?.parse().ok()?,
            nsec_apex,
        };

        if fields.next().is_some() {
            return None;
        }
        Some(meta)
    }
}

impl fmt::Display for RrsetMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RRSET_PREFIX)?;
        if self.nsec_apex {
            write!(f, " {}", NSEC_APEX_FLAG)?;
        }
        write!(
            f,
            " {} {} {} {} {}",
            self.ttl, self.rr_count, self.rrsig_count, self.trust, self.security
        )
    }
}
