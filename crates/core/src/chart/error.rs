//! Chart of accounts error types.
//!
//! The ordering algorithms never fail; these errors come from validating a
//! draft before it reaches them.

use chartree_shared::AppError;
use thiserror::Error;

use super::types::AccountType;

/// Errors raised while validating or applying chart mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    // ========== Required Fields ==========
    /// Code segment is missing.
    #[error("Code is required")]
    CodeRequired,

    /// Name is missing or blank.
    #[error("Name is required")]
    NameRequired,

    /// Root-level accounts must choose a type.
    #[error("Type is required")]
    TypeRequired,

    // ========== Code Errors ==========
    /// A code segment is not a decimal number.
    #[error("Invalid code '{0}': segments must be decimal numbers")]
    InvalidCode(String),

    /// A code segment is outside 1..=999.
    #[error("Invalid code '{0}': segments must be between 1 and 999")]
    SegmentOutOfRange(String),

    /// Another account already uses the code.
    #[error("Code '{0}' is already in use")]
    DuplicateCode(String),

    /// The parent has a child with segment 999 and no suggestion is possible.
    #[error("Parent '{parent}' has no free code left; try '{available}'")]
    CodeSpaceExhausted {
        /// The full parent.
        parent: String,
        /// Nearest ancestor with room, empty for the root.
        available: String,
    },

    // ========== Tree Errors ==========
    /// No account has the given code.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The chosen parent code does not exist.
    #[error("Parent account not found: {0}")]
    ParentNotFound(String),

    /// Accounts that take entries cannot have children.
    #[error("Parent account {0} accepts entries and cannot have children")]
    ParentAcceptsEntries(String),

    /// An account cannot become its own descendant.
    #[error("Cannot move account {code} under its own subtree ({parent})")]
    MoveIntoOwnSubtree {
        /// The account being edited.
        code: String,
        /// The requested parent.
        parent: String,
    },

    /// Child type differs from the parent type.
    #[error("Account type {actual} does not match parent type {expected}")]
    TypeMismatch {
        /// Type of the parent.
        expected: AccountType,
        /// Type of the draft.
        actual: AccountType,
    },

    /// An account with children cannot take entries.
    #[error("Account {0} has children and cannot accept entries")]
    EntryWithChildren(String),
}

impl ChartError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CodeRequired => "CODE_REQUIRED",
            Self::NameRequired => "NAME_REQUIRED",
            Self::TypeRequired => "TYPE_REQUIRED",
            Self::InvalidCode(_) => "INVALID_CODE",
            Self::SegmentOutOfRange(_) => "SEGMENT_OUT_OF_RANGE",
            Self::DuplicateCode(_) => "DUPLICATE_CODE",
            Self::CodeSpaceExhausted { .. } => "CODE_SPACE_EXHAUSTED",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::ParentNotFound(_) => "PARENT_NOT_FOUND",
            Self::ParentAcceptsEntries(_) => "PARENT_ACCEPTS_ENTRIES",
            Self::MoveIntoOwnSubtree { .. } => "MOVE_INTO_OWN_SUBTREE",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::EntryWithChildren(_) => "ENTRY_WITH_CHILDREN",
        }
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        let message = err.to_string();
        match err {
            ChartError::CodeRequired
            | ChartError::NameRequired
            | ChartError::TypeRequired
            | ChartError::InvalidCode(_)
            | ChartError::SegmentOutOfRange(_) => Self::Validation(message),

            ChartError::AccountNotFound(_) | ChartError::ParentNotFound(_) => {
                Self::NotFound(message)
            }

            ChartError::DuplicateCode(_) => Self::Conflict(message),

            ChartError::CodeSpaceExhausted { .. }
            | ChartError::ParentAcceptsEntries(_)
            | ChartError::MoveIntoOwnSubtree { .. }
            | ChartError::TypeMismatch { .. }
            | ChartError::EntryWithChildren(_) => Self::BusinessRule(message),
        }
    }
}
