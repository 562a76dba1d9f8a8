//! launchpad-core
//!
//! Core types, traits, and utilities shared across the launchpad crates.
//!
//! - `types`: re-exported records, summaries, config, and the `LaunchError` enum.
//! - `connector`: the `LaunchConnector` trait implemented by upstream sources.
//! - `query`: validated query arguments (`LaunchYear`, `DateRange`).
//! - `projection`: the record-to-summary projection rule.
#![warn(missing_docs)]

/// The `LaunchConnector` trait and capability labels.
pub mod connector;
/// Record-to-summary projection.
pub mod projection;
/// Validated query arguments.
pub mod query;
pub mod types;

pub use connector::LaunchConnector;
pub use projection::{summarize, summarize_all};
pub use query::{DateRange, LaunchYear};
pub use types::*;
