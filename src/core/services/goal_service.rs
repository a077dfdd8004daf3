use uuid::Uuid;

use crate::core::errors::FinanceError;
use crate::ledger::Goal;

use super::{ServiceError, ServiceResult};

/// User-supplied fields for a new goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target: f64,
    pub initial_contribution: f64,
    pub is_bonus: bool,
}

impl GoalDraft {
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
            initial_contribution: 0.0,
            is_bonus: false,
        }
    }

    pub fn with_initial(mut self, amount: f64) -> Self {
        self.initial_contribution = amount;
        self
    }

    pub fn bonus(mut self, is_bonus: bool) -> Self {
        self.is_bonus = is_bonus;
        self
    }
}

pub struct GoalService;

impl GoalService {
    /// Validates the draft and appends the goal. Nothing is mutated when
    /// validation fails.
    pub fn create(goals: &mut Vec<Goal>, draft: GoalDraft) -> ServiceResult<Uuid> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Goal name cannot be empty".into()));
        }
        if !(draft.target > 0.0) {
            return Err(ServiceError::Invalid(
                "Goal target must be greater than zero".into(),
            ));
        }
        if draft.initial_contribution < 0.0 {
            return Err(ServiceError::Invalid(
                "Initial contribution cannot be negative".into(),
            ));
        }
        if draft.initial_contribution > draft.target {
            return Err(ServiceError::Invalid(
                "Initial contribution cannot exceed the goal target".into(),
            ));
        }

        let mut goal = Goal::new(name, draft.target, draft.is_bonus);
        if draft.initial_contribution > 0.0 {
            goal.push_contribution(draft.initial_contribution);
        }
        let id = goal.id;
        goals.push(goal);
        Ok(id)
    }

    pub fn contribute(goals: &mut [Goal], goal_id: Uuid, amount: f64) -> ServiceResult<f64> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(ServiceError::Invalid(
                "Contribution must be greater than zero".into(),
            ));
        }
        let goal = Self::goal_mut(goals, goal_id)?;
        goal.push_contribution(amount);
        Ok(goal.contributed())
    }

    pub fn delete(goals: &mut Vec<Goal>, goal_id: Uuid) -> ServiceResult<Goal> {
        let index = goals
            .iter()
            .position(|goal| goal.id == goal_id)
            .ok_or(FinanceError::GoalNotFound(goal_id))?;
        Ok(goals.remove(index))
    }

    pub fn goal_mut(goals: &mut [Goal], goal_id: Uuid) -> ServiceResult<&mut Goal> {
        goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| FinanceError::GoalNotFound(goal_id).into())
    }

    /// Resolves a goal reference typed by a user: a 1-based list position, a
    /// full id, or a case-insensitive name.
    pub fn resolve(goals: &[Goal], reference: &str) -> ServiceResult<Uuid> {
        let reference = reference.trim();
        if let Ok(position) = reference.parse::<usize>() {
            if let Some(goal) = position.checked_sub(1).and_then(|idx| goals.get(idx)) {
                return Ok(goal.id);
            }
        }
        if let Ok(id) = Uuid::parse_str(reference) {
            if goals.iter().any(|goal| goal.id == id) {
                return Ok(id);
            }
        }
        goals
            .iter()
            .find(|goal| goal.name.eq_ignore_ascii_case(reference))
            .map(|goal| goal.id)
            .ok_or_else(|| ServiceError::Invalid(format!("No goal matches `{}`", reference)))
    }
}
