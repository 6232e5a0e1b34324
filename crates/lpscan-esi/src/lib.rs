//! # lpscan ESI
//!
//! HTTP client for the EVE Online ESI endpoints the scanner consumes, plus
//! the bounded fan-out helper and the scan pipeline facade.
//!
//! The transport is a trait so the whole pipeline can run against a mock
//! without touching the network.

pub mod client;
pub mod errors;
pub mod fanout;
pub mod sdk;
pub mod transport;

// Re-export common types
pub use client::{EsiClient, DEFAULT_BASE_URL};
pub use errors::{EsiError, Result};
pub use fanout::{run_all, DEFAULT_CONCURRENCY};
pub use sdk::{ScanParams, ScanRunner, DEFAULT_CORP_ID, DEFAULT_REGION_ID};
pub use transport::{EsiTransport, HttpTransport};
