pub mod record;
pub mod record_type;
pub mod rrset;

pub use record::{CacheRecord, RecordKey};
pub use record_type::RecordType;
pub use rrset::RrsetMeta;
