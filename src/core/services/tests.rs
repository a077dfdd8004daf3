use crate::ledger::{BudgetField, BudgetSnapshot, Computation};

use super::*;

fn balanced(snapshot: &BudgetSnapshot) -> bool {
    match &snapshot.totals {
        Computation::Computed(totals) => {
            (totals.total_income - totals.total_expenses - totals.total_saved - totals.balance)
                .abs()
                < 1e-6
        }
        Computation::NotComputed => false,
    }
}

#[test]
fn food_heavy_budget_gets_food_hint() {
    let mut snapshot = BudgetSnapshot::default();
    BudgetService::set_field(&mut snapshot.inputs, BudgetField::Salary, "3000000");
    BudgetService::set_field(&mut snapshot.inputs, BudgetField::Food, "1000000");
    BudgetService::recompute(&mut snapshot);

    let hints = AdviceService::evaluate(
        &snapshot.inputs,
        snapshot.totals.as_option().expect("computed"),
    );
    assert!(hints.contains(&Advice::FoodSpending));
    assert!(!hints.contains(&Advice::Balanced));
    assert!(balanced(&snapshot));
}

#[test]
fn goal_lifecycle_keeps_balance_invariant() {
    let mut snapshot = BudgetSnapshot::default();
    BudgetService::set_field(&mut snapshot.inputs, BudgetField::Salary, "2.000.000");
    BudgetService::add_extra_expense(&mut snapshot.inputs, "150,000").unwrap();

    let goal = GoalService::create(
        &mut snapshot.goals,
        GoalDraft::new("Emergency fund", 1_000_000.0).with_initial(200_000.0),
    )
    .unwrap();
    BudgetService::recompute(&mut snapshot);
    assert!(balanced(&snapshot));
    assert_eq!(snapshot.balance(), Some(1_650_000.0));

    let entry = TransactionService::record(
        &mut snapshot.transactions,
        100_000.0,
        "payday",
        crate::ledger::SAVINGS_CATEGORY,
    )
    .unwrap();
    let contributed = TransactionService::assign_to_goal(
        &mut snapshot.transactions,
        &mut snapshot.goals,
        entry,
        goal,
    )
    .unwrap();
    assert_eq!(contributed, 300_000.0);
    assert!(TransactionService::pending_savings(&snapshot.transactions).is_empty());

    BudgetService::recompute(&mut snapshot);
    assert!(balanced(&snapshot));
    assert_eq!(snapshot.balance(), Some(1_550_000.0));

    GoalService::delete(&mut snapshot.goals, goal).unwrap();
    BudgetService::recompute(&mut snapshot);
    assert_eq!(snapshot.balance(), Some(1_850_000.0));
}

#[test]
fn allowance_follows_balance_after_recompute() {
    let mut snapshot = BudgetSnapshot {
        days_remaining: Some(AllowanceService::parse_days("15").unwrap()),
        ..BudgetSnapshot::default()
    };
    BudgetService::set_field(&mut snapshot.inputs, BudgetField::Salary, "300.000");
    BudgetService::recompute(&mut snapshot);
    assert_eq!(snapshot.daily_allowance, Computation::Computed(20_000.0));

    BudgetService::set_field(&mut snapshot.inputs, BudgetField::Rent, "150.000");
    BudgetService::recompute(&mut snapshot);
    assert_eq!(snapshot.daily_allowance, Computation::Computed(10_000.0));
}
