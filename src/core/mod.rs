pub mod batch;
pub mod provider;
pub mod record;

pub use batch::{BatchReport, RecordFailure};
pub use provider::{DNSProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};
pub use record::{DNSRecord, DNSRecordType};
