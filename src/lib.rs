//! # lpscan
//!
//! CLI that ranks an EVE Online NPC corporation's loyalty point store
//! offers by ISK-per-LP yield, using current sell orders in a reference
//! market region.

pub mod cli;
pub mod config;
pub mod display;
pub mod errors;

// Re-export main public types
pub use config::Config;
pub use errors::{CliError, Result};
