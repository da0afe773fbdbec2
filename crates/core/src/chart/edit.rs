//! Editing accounts and repositioning their subtrees.

use chartree_shared::types::AccountId;

use super::code;
use super::position::insert_account;
use super::types::Account;

/// Replaces the account at `original_code` with `updated` and moves its
/// descendants along.
///
/// The edited account is taken out and re-inserted at the position of its
/// new code. Each descendant, in its pre-edit order, gets its code rebased
/// from `original_code` onto `updated.code`, inherits `updated.account_type`
/// and is re-inserted against the sequence as it stands at that moment. A
/// renumbering can move a subtree past siblings outside it, so a bulk splice
/// would not keep the order.
///
/// When `original_code` is absent nothing is removed and `updated` is still
/// inserted. Callers reject duplicate codes beforehand.
///
/// Returns the number of descendants that were moved.
pub fn edit_account(accounts: &mut Vec<Account>, original_code: &str, updated: Account) -> usize {
    if let Some(index) = accounts.iter().position(|account| account.code == original_code) {
        accounts.remove(index);
    }

    // Collected before the edited account goes back in, so a new code inside
    // the old subtree can never be mistaken for one of its own descendants.
    let descendants: Vec<AccountId> = if original_code.is_empty() {
        Vec::new()
    } else {
        accounts
            .iter()
            .filter(|account| code::is_descendant_of(&account.code, original_code))
            .map(|account| account.id)
            .collect()
    };

    let new_code = updated.code.clone();
    let new_type = updated.account_type;
    insert_account(accounts, updated);

    // Tracked by id: a rebased code may transiently equal a code that has not
    // been moved yet.
    let mut moved = 0;
    for id in descendants {
        let Some(index) = accounts.iter().position(|account| account.id == id) else {
            continue;
        };
        let mut child = accounts.remove(index);
        if let Some(rebased) = code::rebase(&child.code, original_code, &new_code) {
            child.code = rebased;
        }
        child.account_type = new_type;
        insert_account(accounts, child);
        moved += 1;
    }

    moved
}
