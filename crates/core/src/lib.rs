//! Core business logic for Chartree.
//!
//! This crate contains pure business logic with ZERO storage or UI dependencies.
//! All domain types, validation rules, and ordering algorithms live here.
//!
//! # Modules
//!
//! - `chart` - Chart of accounts ordering and tree maintenance

pub mod chart;

pub use chart::{Account, AccountDraft, AccountType, ChartError, ChartOfAccounts};
