//! Persistence layer for the chart of accounts.
//!
//! This crate provides:
//! - A JSON file store holding the ordered account sequence
//! - Error types for loading and saving

pub mod error;
pub mod json;

pub use error::StoreError;
pub use json::{FORMAT_VERSION, JsonFileStore, StoredChart};
