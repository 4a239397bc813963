use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Lists all the records in the zone.
    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error>;
}

#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Adds records to the zone and returns the records that were added.
    async fn append_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error>;
}

#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Creates or overwrites records in the zone and returns the records written.
    async fn set_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error>;
}

#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Removes records from the zone and returns the records that were deleted.
    async fn delete_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error>;
}

/// A backend offering every record capability.
pub trait DNSProvider: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {
    fn name(&self) -> &str;
}
