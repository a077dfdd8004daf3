mod common;

use cash_run::{
    core::services::GoalDraft,
    ledger::{BudgetField, SAVINGS_CATEGORY},
    storage::KeyValueStore,
    FinanceError, FinanceWorkspace,
};
use common::setup_workspace;

#[test]
fn workspace_reloads_everything_it_wrote() {
    let (mut workspace, store, _base) = setup_workspace("ana");
    workspace.set_field(BudgetField::Salary, "1.800.000").unwrap();
    workspace.add_extra_income("120.000").unwrap();
    workspace.set_days_remaining(9).unwrap();
    let goal = workspace
        .create_goal(GoalDraft::new("Trip", 900_000.0).with_initial(100_000.0).bonus(true))
        .unwrap();
    workspace
        .record_transaction(40_000.0, "tips", SAVINGS_CATEGORY)
        .unwrap();

    let reopened = FinanceWorkspace::open(store.clone(), workspace.session().clone()).unwrap();
    assert_eq!(reopened.snapshot(), workspace.snapshot());
    assert_eq!(reopened.goals()[0].id, goal);
    assert!(reopened.goals()[0].is_bonus);
    assert_eq!(reopened.pending_savings().len(), 1);
}

#[test]
fn corrupt_record_fails_closed() {
    let (workspace, store, _base) = setup_workspace("ana");
    let key = format!("finanzas_{}", workspace.session().user_id.simple());
    store.set(&key, "{ not json").unwrap();

    let result = FinanceWorkspace::open(store.clone(), workspace.session().clone());
    match result {
        Err(FinanceError::StorageError(message)) => assert!(message.contains(&key)),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("corrupt record should not load"),
    }
    assert_eq!(store.get(&key).unwrap().as_deref(), Some("{ not json"));
}

#[test]
fn legacy_documents_load_leniently() {
    let (workspace, store, _base) = setup_workspace("ana");
    let user = workspace.session().user_id.simple();
    store
        .set(
            &format!("finanzas_{user}"),
            r#"{
                "salary": "1.000.000",
                "food": 250000,
                "extraIncomeList": ["50.000", 10000],
                "extraExpenseList": []
            }"#,
        )
        .unwrap();
    store
        .set(
            &format!("ahorros_{user}"),
            r#"[{"name": "Fondo", "target": "500.000", "contributed": 120000}]"#,
        )
        .unwrap();

    let mut reopened = FinanceWorkspace::open(store.clone(), workspace.session().clone()).unwrap();
    assert!(reopened.totals().is_none());
    let totals = reopened.recompute().unwrap();
    assert_eq!(totals.total_income, 1_060_000.0);
    assert_eq!(totals.total_expenses, 250_000.0);
    assert_eq!(totals.total_saved, 120_000.0);
    assert_eq!(reopened.goals()[0].history(), &[120_000.0]);
    assert_eq!(reopened.goals()[0].target, 500_000.0);
}

#[test]
fn reset_removes_both_records() {
    let (mut workspace, store, _base) = setup_workspace("ana");
    workspace.set_field(BudgetField::Rent, "700.000").unwrap();
    workspace
        .create_goal(GoalDraft::new("Fund", 10.0))
        .unwrap();
    workspace.reset().unwrap();

    let user = workspace.session().user_id.simple();
    assert!(store.get(&format!("finanzas_{user}")).unwrap().is_none());
    assert!(store.get(&format!("ahorros_{user}")).unwrap().is_none());
    assert!(store.get("usuarios_registrados").unwrap().is_some());
    assert!(workspace.goals().is_empty());
}
