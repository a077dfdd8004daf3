use uuid::Uuid;

use crate::core::errors::FinanceError;
use crate::ledger::{Goal, Transaction};

use super::{goal_service::GoalService, ServiceError, ServiceResult};

pub struct TransactionService;

impl TransactionService {
    pub fn record(
        transactions: &mut Vec<Transaction>,
        amount: f64,
        description: &str,
        category: &str,
    ) -> ServiceResult<Uuid> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(ServiceError::Invalid(
                "Transaction amount must be greater than zero".into(),
            ));
        }
        if category.trim().is_empty() {
            return Err(ServiceError::Invalid("Category cannot be empty".into()));
        }
        let entry = Transaction::new(amount, description.trim(), category.trim());
        let id = entry.id;
        transactions.push(entry);
        Ok(id)
    }

    /// Savings-tagged entries that have not been linked to a goal, in journal
    /// order.
    pub fn pending_savings(transactions: &[Transaction]) -> Vec<&Transaction> {
        transactions
            .iter()
            .filter(|entry| entry.is_pending_savings())
            .collect()
    }

    /// Moves a pending savings entry into a goal's history and flags the entry
    /// as assigned. Entries that are already assigned are rejected, so a
    /// repeated call cannot count the same money twice.
    pub fn assign_to_goal(
        transactions: &mut [Transaction],
        goals: &mut [Goal],
        entry_id: Uuid,
        goal_id: Uuid,
    ) -> ServiceResult<f64> {
        let entry = transactions
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or(FinanceError::TransactionNotFound(entry_id))?;
        if !entry.is_savings() {
            return Err(ServiceError::Invalid(format!(
                "Transaction {} is not a savings entry",
                entry_id
            )));
        }
        if entry.assigned_goal.is_some() {
            return Err(FinanceError::AlreadyAssigned(entry_id).into());
        }
        let goal = GoalService::goal_mut(goals, goal_id)?;
        goal.push_contribution(entry.amount);
        entry.assigned_goal = Some(goal_id);
        Ok(goal.contributed())
    }

    /// Resolves a pending entry typed by a user: a 1-based position in the
    /// pending list or a full id.
    pub fn resolve_pending(transactions: &[Transaction], reference: &str) -> ServiceResult<Uuid> {
        let reference = reference.trim();
        let pending = Self::pending_savings(transactions);
        if let Ok(position) = reference.parse::<usize>() {
            if let Some(entry) = position.checked_sub(1).and_then(|idx| pending.get(idx)) {
                return Ok(entry.id);
            }
        }
        Uuid::parse_str(reference).map_err(|_| {
            ServiceError::Invalid(format!("No pending savings entry matches `{}`", reference))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::GoalDraft;

    fn journal_with_savings(amount: f64) -> (Vec<Transaction>, Uuid) {
        let mut journal = Vec::new();
        TransactionService::record(&mut journal, 50_000.0, "market", "Food").unwrap();
        let id = TransactionService::record(&mut journal, amount, "payday", "Ahorro").unwrap();
        (journal, id)
    }

    #[test]
    fn pending_lists_only_unassigned_savings() {
        let (journal, id) = journal_with_savings(100_000.0);
        let pending = TransactionService::pending_savings(&journal);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
    }

    #[test]
    fn assigning_moves_amount_and_excludes_entry() {
        let (mut journal, entry_id) = journal_with_savings(100_000.0);
        let mut goals = Vec::new();
        let goal_id = GoalService::create(
            &mut goals,
            GoalDraft::new("Trip", 1_000_000.0).with_initial(200_000.0),
        )
        .unwrap();

        let contributed =
            TransactionService::assign_to_goal(&mut journal, &mut goals, entry_id, goal_id)
                .unwrap();
        assert_eq!(contributed, 300_000.0);
        assert!(TransactionService::pending_savings(&journal).is_empty());

        let again = TransactionService::assign_to_goal(&mut journal, &mut goals, entry_id, goal_id);
        assert!(matches!(
            again,
            Err(ServiceError::Core(FinanceError::AlreadyAssigned(_)))
        ));
        assert_eq!(goals[0].contributed(), 300_000.0);
    }

    #[test]
    fn unknown_goal_leaves_entry_pending() {
        let (mut journal, entry_id) = journal_with_savings(10.0);
        let mut goals: Vec<Goal> = Vec::new();
        let result =
            TransactionService::assign_to_goal(&mut journal, &mut goals, entry_id, Uuid::new_v4());
        assert!(result.is_err());
        assert_eq!(TransactionService::pending_savings(&journal).len(), 1);
    }

    #[test]
    fn record_validates_amount_and_category() {
        let mut journal = Vec::new();
        assert!(TransactionService::record(&mut journal, 0.0, "x", "Ahorro").is_err());
        assert!(TransactionService::record(&mut journal, 5.0, "x", " ").is_err());
        assert!(journal.is_empty());
    }
}
