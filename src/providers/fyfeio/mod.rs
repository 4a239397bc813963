//! fyfe.io zone API provider

pub mod client;
pub mod error;
pub mod types;


use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use tracing::{debug, info, warn};

pub use client::{FyfeClient, ZoneApi};
pub use error::{FyfeProviderError, map_error};
pub use types::{AppendRecordsRequest, AppendRecordsResponse, FyfeRecord, RecordWrapper};

use crate::config::Config;
use crate::core::batch::BatchReport;
use crate::core::provider::{
    DNSProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter,
};
use crate::core::record::DNSRecord;
use crate::error::Error;
use types::{to_dns_record, to_record_wrapper};

/// What a single wire call does to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upsert,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Upsert => "upsert",
            Action::Delete => "delete",
        }
    }
}

impl FromStr for Action {
    type Err = FyfeProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upsert" => Ok(Action::Upsert),
            "delete" => Ok(Action::Delete),
            other => Err(FyfeProviderError::InvalidInput(format!(
                "invalid action {other:?}, expected upsert or delete"
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct FyfeProvider<A = FyfeClient> {
    api: A,
}

impl FyfeProvider<FyfeClient> {
    pub fn new(config: &Config) -> Result<Self, FyfeProviderError> {
        Ok(Self::with_api(FyfeClient::new(config)?))
    }
}

impl<A: ZoneApi> FyfeProvider<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Sends one record to the zone API in its own envelope and returns it as written.
    pub async fn call_api(
        &self,
        zone: &str,
        record: &DNSRecord,
        action: Action,
    ) -> Result<DNSRecord, FyfeProviderError> {
        let wrapper = to_record_wrapper(record)?;
        let written = to_dns_record(&wrapper);
        let req = AppendRecordsRequest::single(wrapper);

        debug!(zone, name = %record.name, %action, "calling zone api");
        let res = match action {
            Action::Upsert => self.api.put_records(zone, &req).await?,
            Action::Delete => self.api.delete_records(zone, &req).await?,
        };
        debug!(zone, name = %record.name, message = %res.message, "zone api accepted record");

        Ok(written)
    }

    async fn apply(
        &self,
        zone: &str,
        records: &[DNSRecord],
        action: Action,
    ) -> Result<Vec<DNSRecord>, Error> {
        let mut report = BatchReport::new();
        for record in records {
            let outcome = self.call_api(zone, record, action).await.map_err(map_error);
            if let Err(e) = &outcome {
                warn!(zone, name = %record.name, %action, error = %e, "record failed");
            }
            report.push(record.clone(), outcome);
        }

        info!(
            zone,
            %action,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "zone update finished"
        );
        report.into_result()
    }
}

#[async_trait]
impl<A: ZoneApi> RecordGetter for FyfeProvider<A> {
    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error> {
        let res = self.api.list_records(zone).await.map_err(map_error)?;
        debug!(zone, count = res.records.len(), "listed zone records");
        Ok(res.records.iter().map(to_dns_record).collect())
    }
}

#[async_trait]
impl<A: ZoneApi> RecordAppender for FyfeProvider<A> {
    async fn append_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.apply(zone, records, Action::Upsert).await
    }
}

#[async_trait]
impl<A: ZoneApi> RecordSetter for FyfeProvider<A> {
    async fn set_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.apply(zone, records, Action::Upsert).await
    }
}

#[async_trait]
impl<A: ZoneApi> RecordDeleter for FyfeProvider<A> {
    async fn delete_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.apply(zone, records, Action::Delete).await
    }
}

impl<A: ZoneApi> DNSProvider for FyfeProvider<A> {
    fn name(&self) -> &str {
        "fyfeio"
    }
}
