use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::amount::lenient_amount;

/// Category label that marks a journal entry as money set aside for savings.
pub const SAVINGS_CATEGORY: &str = "Ahorro";

/// An entry in the budget ledger's transaction journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_goal: Option<Uuid>,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category: category.into(),
            assigned_goal: None,
        }
    }

    pub fn is_savings(&self) -> bool {
        self.category.trim().eq_ignore_ascii_case(SAVINGS_CATEGORY)
    }

    /// Savings-tagged and not yet linked to a goal.
    pub fn is_pending_savings(&self) -> bool {
        self.is_savings() && self.assigned_goal.is_none()
    }
}
