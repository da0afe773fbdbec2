//! Business rule validation for account drafts.
//!
//! The ordering algorithms assume well-formed, unique codes and consistent
//! types. Everything that reaches them through [`super::ChartOfAccounts`]
//! passes these checks first.

use chartree_shared::types::AccountId;

use super::code;
use super::draft::{AccountDraft, has_children};
use super::error::ChartError;
use super::types::{Account, AccountType};

/// Validates `draft` against `accounts` and builds the resulting account.
///
/// New drafts get a fresh id; edits keep theirs.
///
/// # Errors
///
/// Returns the first rule the draft breaks, checked in this order: required
/// fields, code syntax, parent, subtree, type, entry flag, uniqueness.
pub fn validate_draft(accounts: &[Account], draft: &AccountDraft) -> Result<Account, ChartError> {
    let segment = draft.segment.trim();
    if segment.is_empty() {
        return Err(ChartError::CodeRequired);
    }

    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ChartError::NameRequired);
    }

    let full_code = draft.full_code();
    validate_code(&full_code)?;

    let parent = resolve_parent(accounts, &draft.parent_code)?;

    if let Some(original) = draft.original_code.as_deref()
        && code::is_self_or_descendant_of(&draft.parent_code, original)
    {
        return Err(ChartError::MoveIntoOwnSubtree {
            code: original.to_string(),
            parent: draft.parent_code.clone(),
        });
    }

    let account_type = resolve_type(parent, draft.account_type)?;

    let entry = draft.entry.unwrap_or(false);
    if entry
        && let Some(original) = draft.original_code.as_deref()
        && has_children(accounts, original)
    {
        return Err(ChartError::EntryWithChildren(original.to_string()));
    }

    let taken = accounts
        .iter()
        .any(|account| account.code == full_code && Some(account.id) != draft.id);
    if taken {
        return Err(ChartError::DuplicateCode(full_code));
    }

    Ok(Account {
        id: draft.id.unwrap_or_else(AccountId::new),
        code: full_code,
        name: name.to_string(),
        account_type,
        entry,
    })
}

/// Checks that every segment of `full_code` is a number in `1..=999`
/// written without leading zeros.
///
/// # Errors
///
/// Returns `InvalidCode` for empty, non-numeric or zero-padded segments and
/// `SegmentOutOfRange` for values outside the range.
pub fn validate_code(full_code: &str) -> Result<(), ChartError> {
    if full_code.is_empty() {
        return Err(ChartError::CodeRequired);
    }

    for segment in full_code.split(code::SEPARATOR) {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChartError::InvalidCode(full_code.to_string()));
        }
        // Leading zeros would give two spellings of the same numeric code.
        if segment.len() > 1 && segment.starts_with('0') {
            return Err(ChartError::InvalidCode(full_code.to_string()));
        }
        let value = if segment.len() > 3 {
            u32::MAX
        } else {
            code::parse_segment(segment)
        };
        if !(1..=code::MAX_SEGMENT).contains(&value) {
            return Err(ChartError::SegmentOutOfRange(full_code.to_string()));
        }
    }

    Ok(())
}

fn resolve_parent<'a>(
    accounts: &'a [Account],
    parent_code: &str,
) -> Result<Option<&'a Account>, ChartError> {
    if parent_code.is_empty() {
        return Ok(None);
    }

    let parent = accounts
        .iter()
        .find(|account| account.code == parent_code)
        .ok_or_else(|| ChartError::ParentNotFound(parent_code.to_string()))?;

    if parent.entry {
        return Err(ChartError::ParentAcceptsEntries(parent_code.to_string()));
    }

    Ok(Some(parent))
}

fn resolve_type(
    parent: Option<&Account>,
    requested: Option<AccountType>,
) -> Result<AccountType, ChartError> {
    match (parent, requested) {
        (Some(parent), None) => Ok(parent.account_type),
        (Some(parent), Some(actual)) if actual != parent.account_type => {
            Err(ChartError::TypeMismatch {
                expected: parent.account_type,
                actual,
            })
        }
        (_, Some(actual)) => Ok(actual),
        (None, None) => Err(ChartError::TypeRequired),
    }
}
