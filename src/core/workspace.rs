//! Explicit per-user application state.
//!
//! A [`FinanceWorkspace`] is the single owner of one user's budget snapshot,
//! goal list and savings journal. Every mutating operation recomputes all
//! derived figures and then persists both records from the same in-memory
//! state, so the budget and savings records can never drift apart.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::FinanceError;
use crate::core::services::{
    AllowanceService, BudgetService, GoalDraft, GoalService, ServiceError, ServiceResult,
    TransactionService,
};
use crate::ledger::{BudgetField, BudgetSnapshot, Goal, Session, Totals, Transaction};
use crate::storage::{load_json, save_json, KeyValueStore, StorageKey};

pub struct FinanceWorkspace {
    session: Session,
    snapshot: BudgetSnapshot,
    store: Arc<dyn KeyValueStore>,
}

impl FinanceWorkspace {
    /// Loads the user's records, starting empty when none exist yet.
    pub fn open(store: Arc<dyn KeyValueStore>, session: Session) -> Result<Self, FinanceError> {
        let mut snapshot: BudgetSnapshot =
            load_json(store.as_ref(), StorageKey::Finances(session.user_id))?.unwrap_or_default();
        let savings: Option<Vec<Goal>> =
            load_json(store.as_ref(), StorageKey::Savings(session.user_id))?;
        if let Some(goals) = savings {
            snapshot.goals = goals;
        }
        tracing::info!(
            user = %session.username,
            goals = snapshot.goals.len(),
            computed = snapshot.totals.is_computed(),
            "workspace opened"
        );
        Ok(Self {
            session,
            snapshot,
            store,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> &BudgetSnapshot {
        &self.snapshot
    }

    pub fn goals(&self) -> &[Goal] {
        &self.snapshot.goals
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn totals(&self) -> Option<Totals> {
        self.snapshot.totals.as_option().copied()
    }

    pub fn recompute(&mut self) -> ServiceResult<Totals> {
        let totals = BudgetService::recompute(&mut self.snapshot);
        self.persist()?;
        Ok(totals)
    }

    pub fn set_field(&mut self, field: BudgetField, raw: &str) -> ServiceResult<Totals> {
        BudgetService::set_field(&mut self.snapshot.inputs, field, raw);
        tracing::info!(%field, "budget field updated");
        self.recompute()
    }

    pub fn add_extra_income(&mut self, raw: &str) -> ServiceResult<f64> {
        let amount = BudgetService::add_extra_income(&mut self.snapshot.inputs, raw)?;
        self.recompute()?;
        Ok(amount)
    }

    pub fn add_extra_expense(&mut self, raw: &str) -> ServiceResult<f64> {
        let amount = BudgetService::add_extra_expense(&mut self.snapshot.inputs, raw)?;
        self.recompute()?;
        Ok(amount)
    }

    /// Sets the days left until the next payday and returns the resulting
    /// daily allowance. Totals must have been computed at least once.
    pub fn set_days_remaining(&mut self, days: u32) -> ServiceResult<f64> {
        if !self.snapshot.totals.is_computed() {
            return Err(FinanceError::NotComputed.into());
        }
        if days == 0 {
            return Err(ServiceError::Invalid(
                "Days until payday must be greater than zero".into(),
            ));
        }
        self.snapshot.days_remaining = Some(days);
        let totals = self.recompute()?;
        let allowance = AllowanceService::daily_allowance(totals.balance, days);
        tracing::info!(days, allowance, "daily allowance updated");
        Ok(allowance)
    }

    pub fn create_goal(&mut self, draft: GoalDraft) -> ServiceResult<Uuid> {
        let id = GoalService::create(&mut self.snapshot.goals, draft)?;
        tracing::info!(goal = %id, "goal created");
        self.recompute()?;
        Ok(id)
    }

    pub fn contribute(&mut self, goal_id: Uuid, amount: f64) -> ServiceResult<f64> {
        let contributed = GoalService::contribute(&mut self.snapshot.goals, goal_id, amount)?;
        tracing::info!(goal = %goal_id, amount, "contribution recorded");
        self.recompute()?;
        Ok(contributed)
    }

    pub fn delete_goal(&mut self, goal_id: Uuid) -> ServiceResult<Goal> {
        let removed = GoalService::delete(&mut self.snapshot.goals, goal_id)?;
        tracing::info!(goal = %goal_id, "goal deleted");
        self.recompute()?;
        Ok(removed)
    }

    pub fn record_transaction(
        &mut self,
        amount: f64,
        description: &str,
        category: &str,
    ) -> ServiceResult<Uuid> {
        let id = TransactionService::record(
            &mut self.snapshot.transactions,
            amount,
            description,
            category,
        )?;
        self.recompute()?;
        Ok(id)
    }

    pub fn pending_savings(&self) -> Vec<&Transaction> {
        TransactionService::pending_savings(&self.snapshot.transactions)
    }

    pub fn assign_pending_savings(&mut self, entry_id: Uuid, goal_id: Uuid) -> ServiceResult<f64> {
        let contributed = TransactionService::assign_to_goal(
            &mut self.snapshot.transactions,
            &mut self.snapshot.goals,
            entry_id,
            goal_id,
        )?;
        tracing::info!(entry = %entry_id, goal = %goal_id, "savings entry assigned");
        self.recompute()?;
        Ok(contributed)
    }

    /// Deletes both persisted records and clears the in-memory state.
    pub fn reset(&mut self) -> ServiceResult<()> {
        let user = self.session.user_id;
        self.store.remove(&StorageKey::Finances(user).to_string())?;
        self.store.remove(&StorageKey::Savings(user).to_string())?;
        self.snapshot = BudgetSnapshot::default();
        tracing::info!(user = %self.session.username, "finances reset");
        Ok(())
    }

    fn persist(&self) -> Result<(), FinanceError> {
        let user = self.session.user_id;
        save_json(self.store.as_ref(), StorageKey::Finances(user), &self.snapshot)?;
        save_json(self.store.as_ref(), StorageKey::Savings(user), &self.snapshot.goals)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn workspace() -> (FinanceWorkspace, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let session = Session {
            user_id: Uuid::new_v4(),
            username: "ana".into(),
        };
        let workspace = FinanceWorkspace::open(store.clone(), session).expect("open workspace");
        (workspace, store)
    }

    #[test]
    fn days_require_computed_totals() {
        let (mut workspace, _store) = workspace();
        assert!(matches!(
            workspace.set_days_remaining(15),
            Err(ServiceError::Core(FinanceError::NotComputed))
        ));
        workspace.set_field(BudgetField::Salary, "300.000").unwrap();
        assert_eq!(workspace.set_days_remaining(15).unwrap(), 20_000.0);
    }

    #[test]
    fn every_mutation_persists_both_records() {
        let (mut workspace, store) = workspace();
        workspace.set_field(BudgetField::Salary, "1000").unwrap();
        workspace
            .create_goal(GoalDraft::new("Trip", 500.0).with_initial(100.0))
            .unwrap();
        let keys = store.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().any(|key| key.starts_with("finanzas_")));
        assert!(keys.iter().any(|key| key.starts_with("ahorros_")));
        assert_eq!(workspace.totals().unwrap().balance, 900.0);
    }

    #[test]
    fn failed_validation_keeps_state() {
        let (mut workspace, store) = workspace();
        let result = workspace.create_goal(GoalDraft::new("Trip", 500_000.0).with_initial(600_000.0));
        assert!(result.is_err());
        assert!(workspace.goals().is_empty());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn reset_clears_memory_and_store() {
        let (mut workspace, store) = workspace();
        workspace.set_field(BudgetField::Rent, "10").unwrap();
        workspace.reset().unwrap();
        assert!(store.keys().is_empty());
        assert!(workspace.totals().is_none());
    }
}
