//! Account drafts: the in-progress state of an add or edit form.
//!
//! A draft keeps the parent code and the last segment apart, the way the
//! user enters them. Choosing a parent fills in the inherited type and a
//! suggested segment.

use chartree_shared::types::AccountId;

use super::code;
use super::suggest::{find_available_parent, suggest_next_code};
use super::types::{Account, AccountType};

/// An account being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    /// Id of the account being edited; `None` for a new account.
    pub id: Option<AccountId>,
    /// Full code of the account being edited, before the edit.
    pub original_code: Option<String>,
    /// Chosen parent; empty for the root.
    pub parent_code: String,
    /// Last code segment.
    pub segment: String,
    /// Display name.
    pub name: String,
    /// Account type; inherited when a parent is chosen.
    pub account_type: Option<AccountType>,
    /// Whether the account takes entries.
    pub entry: Option<bool>,
}

/// Outcome of choosing a parent for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentSelection {
    /// Suggested segment; `None` when the parent is full.
    pub suggested_segment: Option<String>,
    /// Type of the parent record, if it exists.
    pub inherited_type: Option<AccountType>,
    /// A nearer ancestor with room, offered when the chosen parent is full.
    pub redirect: Option<String>,
}

impl AccountDraft {
    /// Starts a draft for a new account under `parent_code`.
    #[must_use]
    pub fn new(parent_code: impl Into<String>) -> Self {
        Self {
            parent_code: parent_code.into(),
            ..Self::default()
        }
    }

    /// Starts a draft that edits `account`.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: Some(account.id),
            original_code: Some(account.code.clone()),
            parent_code: account.parent_code().to_string(),
            segment: account.segment().to_string(),
            name: account.name.clone(),
            account_type: Some(account.account_type),
            entry: Some(account.entry),
        }
    }

    /// Whether this draft edits an existing account.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.original_code.is_some()
    }

    /// Full code made of the parent code and the segment.
    #[must_use]
    pub fn full_code(&self) -> String {
        code::join(&self.parent_code, self.segment.trim())
    }

    /// Parent of the account before the edit; empty for new accounts.
    #[must_use]
    pub fn initial_parent(&self) -> &str {
        self.original_code.as_deref().map_or(code::ROOT, code::parent_code)
    }

    /// Sets the segment from raw user input, see [`sanitize_segment`].
    pub fn set_segment(&mut self, input: &str) {
        self.segment = sanitize_segment(input);
    }

    /// Chooses `parent_code` as the new parent.
    ///
    /// The draft takes the parent's type and the suggested segment (empty
    /// when the parent is full). A redirect is offered when a nearer
    /// ancestor has room, unless the user is returning to the account's
    /// original parent.
    pub fn select_parent(&mut self, accounts: &[Account], parent_code: &str) -> ParentSelection {
        let inherited_type = accounts
            .iter()
            .find(|account| account.code == parent_code)
            .map(|account| account.account_type);
        let suggested_segment = suggest_next_code(accounts, parent_code);

        let available = find_available_parent(accounts, parent_code);
        let redirect = (!available.is_empty()
            && available != parent_code
            && parent_code != self.initial_parent())
        .then_some(available);

        self.parent_code = parent_code.to_string();
        self.account_type = inherited_type;
        self.segment = suggested_segment.clone().unwrap_or_default();

        ParentSelection {
            suggested_segment,
            inherited_type,
            redirect,
        }
    }

    /// Whether the type is fixed by the chosen parent.
    #[must_use]
    pub fn type_locked(&self) -> bool {
        !self.parent_code.is_empty()
    }

    /// Whether the entry flag is fixed because the account has children.
    #[must_use]
    pub fn entry_locked(&self, accounts: &[Account]) -> bool {
        self.original_code
            .as_deref()
            .is_some_and(|original| has_children(accounts, original))
    }
}

/// Cleans raw segment input: keeps digits only and caps the value at 999.
///
/// Leading zeros are dropped; input without digits yields an empty string.
#[must_use]
pub fn sanitize_segment(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return "0".to_string();
    }
    if significant.len() > 3 {
        return code::MAX_SEGMENT.to_string();
    }
    code::parse_segment(significant).min(code::MAX_SEGMENT).to_string()
}

/// Whether any account sits below `code`.
#[must_use]
pub fn has_children(accounts: &[Account], code: &str) -> bool {
    !code.is_empty()
        && accounts
            .iter()
            .any(|account| code::is_descendant_of(&account.code, code))
}

/// Accounts that may serve as the parent of `draft`.
///
/// Excludes the edited account, its descendants and accounts that take
/// entries.
#[must_use]
pub fn eligible_parents<'a>(accounts: &'a [Account], draft: &AccountDraft) -> Vec<&'a Account> {
    accounts
        .iter()
        .filter(|account| {
            let same = draft.id == Some(account.id);
            let below = draft
                .original_code
                .as_deref()
                .is_some_and(|original| code::is_descendant_of(&account.code, original));
            !same && !below && !account.entry
        })
        .collect()
}
