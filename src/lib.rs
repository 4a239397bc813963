//! DNS record management for the fyfe.io zone API.
//!
//! [`FyfeProvider`] implements the generic record capabilities of the `core` module
//! ([`RecordGetter`], [`RecordAppender`], [`RecordSetter`] and [`RecordDeleter`])
//! by issuing one HTTP call per record against the vendor's zone endpoint.
//!
//! ```no_run
//! use std::time::Duration;
//! use fyfe_dns::{Config, DNSRecord, FyfeProvider, RecordAppender};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = FyfeProvider::new(&Config::from_env()?)?;
//! let record = DNSRecord::txt("_acme-challenge", "token", Duration::from_secs(120));
//! provider.append_records("example.com", &[record]).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use config::Config;
pub use crate::core::{
    BatchReport, DNSProvider, DNSRecord, DNSRecordType, RecordAppender, RecordDeleter,
    RecordFailure, RecordGetter, RecordSetter,
};
pub use error::Error;
pub use providers::fyfeio::{FyfeProvider, FyfeProviderError};
