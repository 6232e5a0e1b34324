//! # lpscan Core
//!
//! Core domain logic for LP store yield ranking.
//!
//! This crate contains pure business logic with no I/O dependencies:
//! - Domain models and lenient wire types
//! - Error definitions
//! - Ratio aggregation and ranking
//!
//! Everything here is a function of its inputs; the HTTP layer lives in
//! `lpscan-esi` and the CLI at the workspace root.

pub mod errors;
pub mod models;
pub mod ranking;

// Re-export commonly used types
pub use errors::{CoreError, Result};
pub use models::{LoyaltyOffer, RankedItem, RawLoyaltyOffer, SellOrder, TypeId};
pub use ranking::{aggregate, placeholder_name};
