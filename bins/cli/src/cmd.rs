//! Subcommand implementations.
//!
//! Commands work on a loaded chart and write their report to `out`; the
//! caller decides whether to persist the chart afterwards.

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use chartree_core::chart::code;
use chartree_core::{Account, AccountDraft, AccountType, ChartError, ChartOfAccounts};
use chartree_shared::AppError;

/// Chart maintenance subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the chart as an indented tree
    List,

    /// Add an account
    Add {
        /// Parent code; omit for a root account
        #[arg(long, default_value = "", value_name = "CODE")]
        parent: String,
        /// Last code segment; defaults to the suggested one
        #[arg(long, value_name = "SEG")]
        code: Option<String>,
        /// Account name
        #[arg(long)]
        name: String,
        /// Account type, required for root accounts
        #[arg(long = "type", value_name = "TYPE")]
        account_type: Option<AccountType>,
        /// The account takes entries
        #[arg(long)]
        entry: bool,
    },

    /// Edit an account, moving its subtree when the code changes
    Edit {
        /// Current code of the account
        code: String,
        /// New parent code; empty for the root
        #[arg(long, value_name = "CODE")]
        parent: Option<String>,
        /// New last code segment
        #[arg(long = "code", value_name = "SEG")]
        segment: Option<String>,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New account type
        #[arg(long = "type", value_name = "TYPE")]
        account_type: Option<AccountType>,
        /// Whether the account takes entries
        #[arg(long, value_name = "BOOL")]
        entry: Option<bool>,
    },

    /// Delete an account and everything below it
    Delete {
        /// Code of the account
        code: String,
    },

    /// Print the next free code under a parent
    Suggest {
        /// Parent code; omit for the root
        #[arg(long, default_value = "", value_name = "CODE")]
        parent: String,
    },

    /// Find accounts by code or name
    Search {
        /// Text to look for
        query: String,
    },
}

/// Runs `command` against `chart`.
///
/// Returns whether the chart changed and should be saved.
///
/// # Errors
///
/// Returns chart errors wrapped as [`AppError`], or write failures.
pub fn execute(command: Command, chart: &mut ChartOfAccounts, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::List => {
            list(chart, out)?;
            Ok(false)
        }
        Command::Add {
            parent,
            code,
            name,
            account_type,
            entry,
        } => {
            let mut draft = AccountDraft::new(parent.clone());
            chart.select_parent(&mut draft, &parent);
            match code {
                Some(segment) => draft.set_segment(&segment),
                None => draft.segment = chart.next_code(&parent).map_err(AppError::from)?,
            }
            draft.name = name;
            if account_type.is_some() {
                draft.account_type = account_type;
            }
            draft.entry = Some(entry);

            let account = chart.add(&draft).map_err(AppError::from)?;
            writeln!(out, "Added {}", line(account))?;
            Ok(true)
        }
        Command::Edit {
            code,
            parent,
            segment,
            name,
            account_type,
            entry,
        } => {
            let account = chart
                .get(&code)
                .cloned()
                .ok_or_else(|| AppError::from(ChartError::AccountNotFound(code.clone())))?;
            let mut draft = AccountDraft::from_account(&account);

            if let Some(parent) = parent
                && parent != draft.parent_code
            {
                chart.select_parent(&mut draft, &parent);
                if segment.is_none() {
                    draft.segment = chart.next_code(&parent).map_err(AppError::from)?;
                }
                if draft.account_type.is_none() {
                    draft.account_type = Some(account.account_type);
                }
            }
            if let Some(segment) = segment {
                draft.set_segment(&segment);
            }
            if let Some(name) = name {
                draft.name = name;
            }
            if account_type.is_some() {
                draft.account_type = account_type;
            }
            if entry.is_some() {
                draft.entry = entry;
            }

            let edited = chart.edit(&code, &draft).map_err(AppError::from)?;
            writeln!(out, "Updated {code} -> {}", line(edited))?;
            Ok(true)
        }
        Command::Delete { code } => {
            let removed = chart.delete(&code).map_err(AppError::from)?;
            writeln!(out, "Deleted {code} ({removed} accounts)")?;
            Ok(true)
        }
        Command::Suggest { parent } => {
            suggest(chart, &parent, out)?;
            Ok(false)
        }
        Command::Search { query } => {
            let found = chart.search(&query);
            info!(%query, found = found.len(), "Search");
            if found.is_empty() {
                writeln!(out, "No matching accounts")?;
            }
            for account in found {
                writeln!(out, "{}", line(account))?;
            }
            Ok(false)
        }
    }
}

fn list(chart: &ChartOfAccounts, out: &mut impl Write) -> Result<()> {
    if chart.is_empty() {
        writeln!(out, "No accounts")?;
        return Ok(());
    }
    for account in chart.accounts() {
        let indent = "  ".repeat(account.depth().saturating_sub(1));
        writeln!(out, "{indent}{}", line(account))?;
    }
    Ok(())
}

fn suggest(chart: &ChartOfAccounts, parent: &str, out: &mut impl Write) -> Result<()> {
    if let Some(segment) = chart.suggest(parent) {
        writeln!(out, "{}", code::join(parent, &segment))?;
        return Ok(());
    }

    let available = chart.available_parent(parent);
    let label = if available.is_empty() { "the root" } else { available.as_str() };
    match chart.suggest(&available) {
        Some(segment) => writeln!(
            out,
            "{parent} is full; next free code under {label}: {}",
            code::join(&available, &segment)
        )?,
        None => writeln!(out, "{parent} is full and no ancestor has room")?,
    }
    Ok(())
}

fn line(account: &Account) -> String {
    let entry = if account.entry { " (entry)" } else { "" };
    format!(
        "{}  {}  [{}]{entry}",
        account.code, account.name, account.account_type
    )
}
