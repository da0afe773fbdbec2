//! Removal of accounts together with their subtrees.

use super::code;
use super::types::Account;

/// Returns `accounts` without the account `target` and all its descendants.
///
/// The remaining records keep their relative order. A `target` that is not
/// present, or the empty root code, leaves the sequence unchanged.
#[must_use]
pub fn remove_account(accounts: &[Account], target: &str) -> Vec<Account> {
    accounts
        .iter()
        .filter(|account| !in_subtree(&account.code, target))
        .cloned()
        .collect()
}

/// Removes the account `target` and its subtree in place.
///
/// Returns the number of records removed.
pub fn remove_account_in_place(accounts: &mut Vec<Account>, target: &str) -> usize {
    let before = accounts.len();
    accounts.retain(|account| !in_subtree(&account.code, target));
    before - accounts.len()
}

// The root is not an account, so it has no subtree to remove.
fn in_subtree(candidate: &str, target: &str) -> bool {
    !target.is_empty() && code::is_self_or_descendant_of(candidate, target)
}
