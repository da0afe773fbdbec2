//! Placement of codes in the ordered account sequence.
//!
//! The sequence is the pre-order walk of the implicit tree, with siblings in
//! ascending numeric order of their last segment. A parent precedes its
//! whole subtree.

use super::code;
use super::types::Account;

/// Finds the index at which an account with `new_code` must be inserted.
///
/// `new_code` must not already be present. The result lies in
/// `0..=accounts.len()`.
///
/// The new account goes right after the last record that either is its
/// parent or belongs to the subtree of a sibling with a smaller segment.
/// A record in that subtree shares the sibling's segment at the parent's
/// depth, so the whole subtree of the preceding sibling is skipped. With no
/// such record the account goes first.
#[must_use]
pub fn find_insertion_index(accounts: &[Account], new_code: &str) -> usize {
    let parent = code::parent_code(new_code);
    let parent_depth = code::depth(parent);
    let key = code::last_segment(new_code);

    let mut base = accounts.iter().position(|account| account.code == parent);

    for (index, account) in accounts.iter().enumerate() {
        if !code::is_descendant_of(&account.code, parent) {
            continue;
        }
        let sibling_key = code::segment_at(&account.code, parent_depth).unwrap_or(0);
        if sibling_key < key {
            base = Some(index);
        }
    }

    base.map_or(0, |index| index + 1)
}

/// Inserts `account` at its ordered position and returns that index.
pub fn insert_account(accounts: &mut Vec<Account>, account: Account) -> usize {
    let index = find_insertion_index(accounts, &account.code);
    accounts.insert(index, account);
    index
}

/// Checks that `accounts` is in canonical order with unique codes.
///
/// Returns the index of the first record that breaks the order.
pub fn check_order(accounts: &[Account]) -> Result<(), usize> {
    for (index, pair) in accounts.windows(2).enumerate() {
        if compare_codes(&pair[0].code, &pair[1].code) != std::cmp::Ordering::Less {
            return Err(index + 1);
        }
    }
    Ok(())
}

/// Total order on codes: segment by segment, numerically, ancestors first.
#[must_use]
pub fn compare_codes(left: &str, right: &str) -> std::cmp::Ordering {
    let segments = |code: &str| -> Vec<u32> {
        if code.is_empty() {
            Vec::new()
        } else {
            code.split(code::SEPARATOR).map(code::parse_segment).collect()
        }
    };
    segments(left).cmp(&segments(right))
}
