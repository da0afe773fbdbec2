//! Chart of accounts domain types.

use chartree_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use super::code;

/// Account type classification.
///
/// Every account below a root inherits the type of its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Income account.
    #[serde(alias = "receita")]
    Income,
    /// Expense account.
    #[serde(alias = "despesa")]
    Expense,
}

impl AccountType {
    /// Returns the serialized tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            other => Err(format!("unknown account type '{other}'")),
        }
    }
}

/// A node of the chart of accounts tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identifier assigned at creation.
    pub id: AccountId,
    /// Dotted-decimal code, e.g. `1.1.150`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Income or expense, inherited from the parent.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Whether the account takes ledger entries directly.
    #[serde(default)]
    pub entry: bool,
}

impl Account {
    /// Creates an account with a fresh id.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        entry: bool,
    ) -> Self {
        Self {
            id: AccountId::new(),
            code: code.into(),
            name: name.into(),
            account_type,
            entry,
        }
    }

    /// Tree depth of this account (1 for root-level accounts).
    #[must_use]
    pub fn depth(&self) -> usize {
        code::depth(&self.code)
    }

    /// Code of this account's parent; empty at root level.
    #[must_use]
    pub fn parent_code(&self) -> &str {
        code::parent_code(&self.code)
    }

    /// The last code segment, as typed by the user.
    #[must_use]
    pub fn segment(&self) -> &str {
        self.code
            .rsplit_once(code::SEPARATOR)
            .map_or(self.code.as_str(), |(_, last)| last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_serde_tags() {
        assert_eq!(
            serde_json::to_string(&AccountType::Income).unwrap(),
            "\"income\""
        );
        let legacy: AccountType = serde_json::from_str("\"despesa\"").unwrap();
        assert_eq!(legacy, AccountType::Expense);
    }

    #[test]
    fn test_account_type_from_str() {
        assert_eq!("Income".parse::<AccountType>(), Ok(AccountType::Income));
        assert_eq!("receita".parse::<AccountType>(), Ok(AccountType::Income));
        assert!("asset".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_account_serializes_type_field() {
        let account = Account::new("1.2", "Taxes", AccountType::Expense, true);
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["code"], "1.2");
        assert_eq!(json["entry"], true);
    }

    #[test]
    fn test_entry_defaults_to_false() {
        let json = format!(
            r#"{{"id":"{}","code":"1","name":"Salary","type":"income"}}"#,
            AccountId::new()
        );
        let account: Account = serde_json::from_str(&json).unwrap();
        assert!(!account.entry);
    }

    #[test]
    fn test_account_path_helpers() {
        let account = Account::new("1.1.150", "Node", AccountType::Income, false);
        assert_eq!(account.depth(), 3);
        assert_eq!(account.parent_code(), "1.1");
        assert_eq!(account.segment(), "150");

        let root = Account::new("4", "Root", AccountType::Income, false);
        assert_eq!(root.parent_code(), "");
        assert_eq!(root.segment(), "4");
    }
}
