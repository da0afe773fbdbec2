//! Chart of accounts tree maintenance.
//!
//! The chart is a flat sequence of accounts whose dotted-decimal codes encode
//! an implicit tree. This module keeps that sequence in pre-order:
//! - Code helpers (depth, segments, ancestry)
//! - Insertion position finder
//! - Suggested codes and available parents
//! - Removal of subtrees
//! - Edits that renumber and retype descendants
//! - Search, drafts and validation for callers
//! - `ChartOfAccounts`, the caller-owned state tying them together

pub mod code;
pub mod draft;
pub mod edit;
pub mod error;
pub mod position;
pub mod removal;
pub mod search;
pub mod service;
pub mod suggest;
pub mod types;
pub mod validation;

#[cfg(test)]
mod ordering_props;

pub use code::{depth, last_segment};
pub use draft::{AccountDraft, ParentSelection, eligible_parents, has_children, sanitize_segment};
pub use edit::edit_account;
pub use error::ChartError;
pub use position::{find_insertion_index, insert_account};
pub use removal::remove_account;
pub use search::search;
pub use service::ChartOfAccounts;
pub use suggest::{find_available_parent, suggest_next_code};
pub use types::{Account, AccountType};
pub use validation::validate_draft;
