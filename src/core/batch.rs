use std::fmt;

use crate::core::record::DNSRecord;
use crate::error::Error;

#[derive(Debug)]
pub struct RecordFailure {
    pub record: DNSRecord,
    pub error: Error,
}

/// Outcome of applying one operation to several records, one entry per record.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<DNSRecord>,
    pub failed: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DNSRecord, outcome: Result<DNSRecord, Error>) {
        match outcome {
            Ok(written) => self.succeeded.push(written),
            Err(error) => self.failed.push(RecordFailure { record, error }),
        }
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// All records succeeded, or the whole report comes back as the error.
    pub fn into_result(self) -> Result<Vec<DNSRecord>, Error> {
        if self.is_success() {
            Ok(self.succeeded)
        } else {
            Err(Error::PartialFailure(self))
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} records failed",
            self.failed.len(),
            self.attempted()
        )?;
        for failure in &self.failed {
            let (name, record_type) = failure.record.key();
            write!(f, "; {record_type} {name}: {}", failure.error)?;
        }
        Ok(())
    }
}
