//! Chart of accounts state for callers that own the account sequence.
//!
//! [`ChartOfAccounts`] wraps the ordered sequence and runs every mutation
//! through validation before handing it to the ordering algorithms. It holds
//! no global state; callers create it, pass it around and persist it.

use std::collections::HashMap;

use chartree_shared::types::AccountId;
use tracing::{debug, info, warn};

use super::code;
use super::draft::{AccountDraft, ParentSelection};
use super::edit::edit_account;
use super::error::ChartError;
use super::position::{compare_codes, insert_account};
use super::removal::remove_account_in_place;
use super::search::search;
use super::suggest::{find_available_parent, suggest_next_code};
use super::types::Account;
use super::validation::{validate_code, validate_draft};

/// An ordered, validated chart of accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOfAccounts {
    accounts: Vec<Account>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart from records in any order.
    ///
    /// Records are put into canonical order and must form a consistent tree:
    /// valid unique codes, existing parents that take no entries, and
    /// children typed like their parents.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule: `InvalidCode`/`SegmentOutOfRange`,
    /// `DuplicateCode`, `ParentNotFound`, `ParentAcceptsEntries` or
    /// `TypeMismatch`.
    pub fn from_accounts(mut accounts: Vec<Account>) -> Result<Self, ChartError> {
        for account in &accounts {
            validate_code(&account.code)?;
        }

        accounts.sort_by(|left, right| compare_codes(&left.code, &right.code));

        if let Some(pair) = accounts
            .windows(2)
            .find(|pair| compare_codes(&pair[0].code, &pair[1].code).is_eq())
        {
            return Err(ChartError::DuplicateCode(pair[1].code.clone()));
        }

        let by_code: HashMap<&str, &Account> = accounts
            .iter()
            .map(|account| (account.code.as_str(), account))
            .collect();
        for account in &accounts {
            let parent_code = account.parent_code();
            if parent_code.is_empty() {
                continue;
            }
            let parent = by_code
                .get(parent_code)
                .ok_or_else(|| ChartError::ParentNotFound(parent_code.to_string()))?;
            if parent.entry {
                return Err(ChartError::ParentAcceptsEntries(parent_code.to_string()));
            }
            if parent.account_type != account.account_type {
                return Err(ChartError::TypeMismatch {
                    expected: parent.account_type,
                    actual: account.account_type,
                });
            }
        }

        debug!(accounts = accounts.len(), "Chart rebuilt from records");
        Ok(Self { accounts })
    }

    /// The accounts in tree order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Consumes the chart and returns the ordered accounts.
    #[must_use]
    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the chart has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.code == code)
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn get_by_id(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Adds a new account from `draft`.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the draft is rejected.
    pub fn add(&mut self, draft: &AccountDraft) -> Result<&Account, ChartError> {
        let mut draft = draft.clone();
        draft.id = None;
        draft.original_code = None;

        let account = validate_draft(&self.accounts, &draft).inspect_err(|err| {
            warn!(code = %draft.full_code(), error = %err, "Rejected new account");
        })?;

        let id = account.id;
        let index = insert_account(&mut self.accounts, account);
        info!(code = %self.accounts[index].code, %id, index, "Account added");

        Ok(&self.accounts[index])
    }

    /// Applies `draft` to the account currently at `original_code`.
    ///
    /// The account keeps its id. Descendants follow a code change and take
    /// the new type.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` when `original_code` is absent, or the
    /// validation error when the draft is rejected.
    pub fn edit(&mut self, original_code: &str, draft: &AccountDraft) -> Result<&Account, ChartError> {
        let existing = self
            .get(original_code)
            .ok_or_else(|| ChartError::AccountNotFound(original_code.to_string()))?;

        let mut draft = draft.clone();
        draft.id = Some(existing.id);
        draft.original_code = Some(original_code.to_string());

        let account = validate_draft(&self.accounts, &draft).inspect_err(|err| {
            warn!(code = %original_code, error = %err, "Rejected account edit");
        })?;

        let id = account.id;
        let new_code = account.code.clone();
        let moved = edit_account(&mut self.accounts, original_code, account);
        if moved > 0 {
            debug!(from = %original_code, to = %new_code, moved, "Descendants repositioned");
        }
        info!(from = %original_code, to = %new_code, %id, "Account edited");

        self.get_by_id(id)
            .ok_or_else(|| ChartError::AccountNotFound(new_code))
    }

    /// Deletes the account at `code` together with its descendants.
    ///
    /// Returns the number of accounts removed.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` when `code` is absent.
    pub fn delete(&mut self, code: &str) -> Result<usize, ChartError> {
        if self.get(code).is_none() {
            return Err(ChartError::AccountNotFound(code.to_string()));
        }

        let removed = remove_account_in_place(&mut self.accounts, code);
        info!(%code, removed, "Account deleted");

        Ok(removed)
    }

    /// Suggested segment for a new child of `parent_code`; `None` when full.
    #[must_use]
    pub fn suggest(&self, parent_code: &str) -> Option<String> {
        suggest_next_code(&self.accounts, parent_code)
    }

    /// Suggested segment for a new child of `parent_code`.
    ///
    /// # Errors
    ///
    /// Returns `CodeSpaceExhausted`, naming the nearest ancestor with room,
    /// when the parent is full.
    pub fn next_code(&self, parent_code: &str) -> Result<String, ChartError> {
        self.suggest(parent_code)
            .ok_or_else(|| ChartError::CodeSpaceExhausted {
                parent: parent_code.to_string(),
                available: self.available_parent(parent_code),
            })
    }

    /// Nearest ancestor of `parent_code`, itself included, with room for a
    /// new child. Empty for the root.
    #[must_use]
    pub fn available_parent(&self, parent_code: &str) -> String {
        find_available_parent(&self.accounts, parent_code)
    }

    /// Points `draft` at `parent_code`, see [`AccountDraft::select_parent`].
    pub fn select_parent(&self, draft: &mut AccountDraft, parent_code: &str) -> ParentSelection {
        draft.select_parent(&self.accounts, parent_code)
    }

    /// Accounts whose code or name matches `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Account> {
        search(&self.accounts, query)
    }

    /// Direct children of `parent_code` in order.
    #[must_use]
    pub fn children(&self, parent_code: &str) -> Vec<&Account> {
        let depth = code::depth(parent_code) + 1;
        self.accounts
            .iter()
            .filter(|account| {
                code::is_descendant_of(&account.code, parent_code) && account.depth() == depth
            })
            .collect()
    }
}
