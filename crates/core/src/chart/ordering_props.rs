//! Property-based tests for chart ordering and tree maintenance.
//!
//! Charts are grown from empty through random add/edit/delete operations, so
//! every property is checked against sequences the chart can actually reach.

use proptest::prelude::*;

use super::code;
use super::draft::AccountDraft;
use super::position::{check_order, find_insertion_index, insert_account};
use super::removal::remove_account;
use super::service::ChartOfAccounts;
use super::suggest::{find_available_parent, suggest_next_code};
use super::types::{Account, AccountType};

/// A chart mutation with indices resolved against the chart at apply time.
#[derive(Debug, Clone)]
enum Op {
    Add { parent: usize, segment: u32, income: bool },
    Edit { target: usize, parent: usize, segment: u32 },
    Delete { target: usize },
}

/// Small segments so siblings collide and reorder often.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), 1u32..=12, any::<bool>())
            .prop_map(|(parent, segment, income)| Op::Add { parent, segment, income }),
        2 => (any::<usize>(), any::<usize>(), 1u32..=12)
            .prop_map(|(target, parent, segment)| Op::Edit { target, parent, segment }),
        1 => any::<usize>().prop_map(|target| Op::Delete { target }),
    ]
}

/// Picks a parent code: one slot past the end means the root.
fn pick_parent(chart: &ChartOfAccounts, pick: usize) -> String {
    let accounts = chart.accounts();
    let slot = pick % (accounts.len() + 1);
    accounts
        .get(slot)
        .map_or_else(String::new, |account| account.code.clone())
}

fn apply(chart: &mut ChartOfAccounts, op: &Op) {
    match *op {
        Op::Add { parent, segment, income } => {
            let parent_code = pick_parent(chart, parent);
            let mut draft = AccountDraft::new(parent_code.clone());
            chart.select_parent(&mut draft, &parent_code);
            draft.segment = segment.to_string();
            draft.name = format!("Conta {segment}");
            if parent_code.is_empty() {
                draft.account_type = Some(if income {
                    AccountType::Income
                } else {
                    AccountType::Expense
                });
            }
            let _ = chart.add(&draft);
        }
        Op::Edit { target, parent, segment } => {
            if chart.is_empty() {
                return;
            }
            let account = chart.accounts()[target % chart.len()].clone();
            let parent_code = pick_parent(chart, parent);
            let mut draft = AccountDraft::from_account(&account);
            chart.select_parent(&mut draft, &parent_code);
            if parent_code.is_empty() {
                draft.account_type = Some(account.account_type);
            }
            draft.segment = segment.to_string();
            draft.entry = Some(false);
            let _ = chart.edit(&account.code, &draft);
        }
        Op::Delete { target } => {
            if chart.is_empty() {
                return;
            }
            let code = chart.accounts()[target % chart.len()].code.clone();
            let _ = chart.delete(&code);
        }
    }
}

fn chart_strategy() -> impl Strategy<Value = ChartOfAccounts> {
    prop::collection::vec(op_strategy(), 0..60).prop_map(|ops| {
        let mut chart = ChartOfAccounts::new();
        for op in &ops {
            apply(&mut chart, op);
        }
        chart
    })
}

fn subtree_size(accounts: &[Account], root: &str) -> usize {
    accounts
        .iter()
        .filter(|account| code::is_self_or_descendant_of(&account.code, root))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every reachable chart is in pre-order with numeric sibling order,
    /// every parent exists and every child shares its parent's type.
    #[test]
    fn prop_operations_preserve_order(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut chart = ChartOfAccounts::new();
        for op in &ops {
            apply(&mut chart, op);

            let accounts = chart.accounts();
            prop_assert_eq!(check_order(accounts), Ok(()), "after {:?}", op);

            for account in accounts {
                let parent = account.parent_code();
                if parent.is_empty() {
                    continue;
                }
                let parent_account = chart.get(parent);
                prop_assert!(parent_account.is_some(), "dangling parent for {}", account.code);
                prop_assert_eq!(
                    parent_account.map(|p| p.account_type),
                    Some(account.account_type)
                );
            }
        }
    }

    /// Inserting a fresh code and removing it again restores the sequence.
    #[test]
    fn prop_insert_then_remove_round_trips(
        chart in chart_strategy(),
        parent in any::<usize>(),
    ) {
        let parent_code = pick_parent(&chart, parent);
        let Some(segment) = suggest_next_code(chart.accounts(), &parent_code) else {
            return Ok(());
        };
        let new_code = code::join(&parent_code, &segment);

        let original = chart.accounts().to_vec();
        let mut accounts = original.clone();
        insert_account(&mut accounts, Account::new(new_code.clone(), "Tmp", AccountType::Income, true));

        prop_assert_eq!(check_order(&accounts), Ok(()));
        prop_assert_eq!(remove_account(&accounts, &new_code), original);
    }

    /// The insertion index matches the first record that sorts after the code.
    #[test]
    fn prop_insertion_index_matches_sorted_position(
        chart in chart_strategy(),
        parent in any::<usize>(),
        segment in 1u32..=20,
    ) {
        let parent_code = pick_parent(&chart, parent);
        let new_code = code::join(&parent_code, &segment.to_string());
        prop_assume!(chart.get(&new_code).is_none());

        let expected = chart
            .accounts()
            .iter()
            .position(|account| {
                super::position::compare_codes(&account.code, &new_code).is_gt()
            })
            .unwrap_or(chart.len());

        prop_assert_eq!(find_insertion_index(chart.accounts(), &new_code), expected);
    }

    /// Removal drops exactly the subtree and keeps everything else in order.
    #[test]
    fn prop_removal_drops_exact_subtree(chart in chart_strategy(), target in any::<usize>()) {
        prop_assume!(!chart.is_empty());
        let accounts = chart.accounts();
        let code = accounts[target % accounts.len()].code.clone();

        let remaining = remove_account(accounts, &code);

        prop_assert_eq!(remaining.len(), accounts.len() - subtree_size(accounts, &code));
        prop_assert!(remaining.iter().all(|a| !code::is_self_or_descendant_of(&a.code, &code)));
        prop_assert_eq!(check_order(&remaining), Ok(()));
    }

    /// Moving an account carries its whole subtree to the new code.
    #[test]
    fn prop_edit_moves_whole_subtree(
        chart in chart_strategy(),
        target in any::<usize>(),
        parent in any::<usize>(),
        segment in 1u32..=12,
    ) {
        prop_assume!(!chart.is_empty());
        let mut chart = chart;
        let account = chart.accounts()[target % chart.len()].clone();
        let before = subtree_size(chart.accounts(), &account.code);
        let parent_code = pick_parent(&chart, parent);

        let mut draft = AccountDraft::from_account(&account);
        chart.select_parent(&mut draft, &parent_code);
        if parent_code.is_empty() {
            draft.account_type = Some(account.account_type);
        }
        draft.segment = segment.to_string();
        draft.entry = Some(account.entry);

        if let Ok(edited) = chart.edit(&account.code, &draft) {
            let new_code = edited.code.clone();
            prop_assert_eq!(edited.id, account.id);
            prop_assert_eq!(subtree_size(chart.accounts(), &new_code), before);
            prop_assert_eq!(check_order(chart.accounts()), Ok(()));
        }
    }

    /// A suggestion is always free and above every direct child.
    #[test]
    fn prop_suggestion_is_free(chart in chart_strategy(), parent in any::<usize>()) {
        let parent_code = pick_parent(&chart, parent);
        if let Some(segment) = suggest_next_code(chart.accounts(), &parent_code) {
            let value: u32 = segment.parse().unwrap();
            prop_assert!((1..=code::MAX_SEGMENT).contains(&value));
            prop_assert!(chart.get(&code::join(&parent_code, &segment)).is_none());
            for child in chart.children(&parent_code) {
                prop_assert!(code::last_segment(&child.code) < value);
            }
        }
    }

    /// The available parent is an ancestor-or-self without a 999 child.
    #[test]
    fn prop_available_parent_has_room(chart in chart_strategy(), parent in any::<usize>()) {
        let parent_code = pick_parent(&chart, parent);
        let available = find_available_parent(chart.accounts(), &parent_code);
        if !available.is_empty() {
            prop_assert!(code::is_self_or_descendant_of(&parent_code, &available));
            prop_assert!(chart.get(&code::join(&available, "999")).is_none());
        }
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_suggestion_at_boundary() {
        let mut accounts = Vec::new();
        for code in ["9", "9.9", "9.9.554"] {
            insert_account(&mut accounts, Account::new(code, "x", AccountType::Income, false));
        }
        assert_eq!(suggest_next_code(&accounts, "9.9").as_deref(), Some("555"));

        insert_account(&mut accounts, Account::new("9.9.999", "x", AccountType::Income, true));
        assert_eq!(suggest_next_code(&accounts, "9.9"), None);
        assert_eq!(find_available_parent(&accounts, "9.9"), "9");
    }
}
