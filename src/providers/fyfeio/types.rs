use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::record::{DNSRecord, DNSRecordType};
use crate::providers::fyfeio::error::FyfeProviderError;

pub const TXT: &str = "TXT";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FyfeRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordWrapper {
    pub name: String,
    pub ttl: u32,
    pub record: FyfeRecord,
}

/// Envelope for write calls. Delete calls send the same shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppendRecordsRequest {
    pub records: Vec<RecordWrapper>,
}

impl AppendRecordsRequest {
    pub fn single(wrapper: RecordWrapper) -> Self {
        Self {
            records: vec![wrapper],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppendRecordsResponse {
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<RecordWrapper>,
}

/// Whole seconds of `ttl`. Sub-second precision is dropped.
pub fn ttl_seconds(ttl: Duration) -> Result<u32, FyfeProviderError> {
    u32::try_from(ttl.as_secs()).map_err(|_| {
        FyfeProviderError::InvalidInput(format!(
            "ttl of {}s does not fit in 32 bits",
            ttl.as_secs()
        ))
    })
}

pub fn to_dns_record(wrapper: &RecordWrapper) -> DNSRecord {
    DNSRecord {
        record_type: DNSRecordType::from(wrapper.record.record_type.as_str()),
        name: wrapper.name.clone(),
        value: wrapper.record.text.clone(),
        ttl: Duration::from_secs(wrapper.ttl.into()),
    }
}

/// The vendor only stores text records, so anything else is rejected here.
pub fn to_record_wrapper(rec: &DNSRecord) -> Result<RecordWrapper, FyfeProviderError> {
    if rec.record_type != DNSRecordType::TXT {
        return Err(FyfeProviderError::InvalidInput(format!(
            "unsupported record type {} for {}: only TXT records are supported",
            rec.record_type, rec.name
        )));
    }
    Ok(RecordWrapper {
        name: rec.name.clone(),
        ttl: ttl_seconds(rec.ttl)?,
        record: FyfeRecord {
            record_type: TXT.to_string(),
            text: rec.value.clone(),
        },
    })
}
