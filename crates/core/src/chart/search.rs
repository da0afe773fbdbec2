//! Account search.

use super::types::Account;

/// Filters accounts by code or name.
///
/// An account matches when its code contains `query` or its name contains
/// `query` ignoring case. A blank query matches everything. Results keep
/// sequence order.
#[must_use]
pub fn search<'a>(accounts: &'a [Account], query: &str) -> Vec<&'a Account> {
    let query = query.trim();
    if query.is_empty() {
        return accounts.iter().collect();
    }

    let needle = query.to_lowercase();
    accounts
        .iter()
        .filter(|account| {
            account.code.contains(query) || account.name.to_lowercase().contains(&needle)
        })
        .collect()
}
