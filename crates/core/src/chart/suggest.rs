//! Code suggestions for new accounts.

use super::code;
use super::types::Account;

/// Suggests the segment for a new direct child of `parent_code`.
///
/// The root is the parent when `parent_code` is empty. The suggestion is the
/// last direct child's segment plus one, or `1` for a parent without
/// children. Returns `None` once the next segment would pass
/// [`code::MAX_SEGMENT`].
#[must_use]
pub fn suggest_next_code(accounts: &[Account], parent_code: &str) -> Option<String> {
    let child_depth = code::depth(parent_code) + 1;

    // The sequence is ordered, so the last direct child holds the highest segment.
    let last_child = accounts.iter().rev().find(|account| {
        code::is_descendant_of(&account.code, parent_code)
            && code::depth(&account.code) == child_depth
    });

    let Some(last_child) = last_child else {
        return Some("1".to_string());
    };

    let next = code::last_segment(&last_child.code) + 1;
    (next <= code::MAX_SEGMENT).then(|| next.to_string())
}

/// Finds the nearest parent, starting at `parent_code` itself, that can
/// still take a new direct child.
///
/// A parent is full once a child with segment 999 exists. Returns the empty
/// root code when `parent_code` is empty or every ancestor is full.
#[must_use]
pub fn find_available_parent(accounts: &[Account], parent_code: &str) -> String {
    code::self_and_ancestors(parent_code)
        .find(|candidate| !has_last_child(accounts, candidate))
        .unwrap_or(code::ROOT)
        .to_string()
}

fn has_last_child(accounts: &[Account], parent_code: &str) -> bool {
    let last = code::join(parent_code, &code::MAX_SEGMENT.to_string());
    accounts.iter().any(|account| account.code == last)
}
