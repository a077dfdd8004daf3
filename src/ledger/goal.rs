use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::amount::{lenient_amount, lenient_amounts};

/// A named savings target (or bonus) with its running contribution history.
///
/// `contributed` is always the sum of `history`; the only way to change it is
/// through [`Goal::push_contribution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target: f64,
    contributed: f64,
    pub is_bonus: bool,
    history: Vec<f64>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64, is_bonus: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            contributed: 0.0,
            is_bonus,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn contributed(&self) -> f64 {
        self.contributed
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn push_contribution(&mut self, amount: f64) {
        self.history.push(amount);
        self.contributed = self.history.iter().sum();
    }

    /// Completion percentage clamped to `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.contributed / self.target * 100.0).clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.contributed).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0.0 && self.contributed >= self.target
    }
}

/// Persisted shape; `contributed` is recomputed from history on load and only
/// trusted when no history was recorded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredGoal {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    target: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    contributed: f64,
    #[serde(default)]
    is_bonus: bool,
    #[serde(default, deserialize_with = "lenient_amounts")]
    history: Vec<f64>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl<'de> Deserialize<'de> for Goal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredGoal::deserialize(deserializer)?;
        let history = if stored.history.is_empty() && stored.contributed != 0.0 {
            vec![stored.contributed]
        } else {
            stored.history
        };
        let contributed = history.iter().sum();
        Ok(Goal {
            id: stored.id,
            name: stored.name,
            target: stored.target,
            contributed,
            is_bonus: stored.is_bonus,
            history,
            created_at: stored.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributions_keep_sum_in_sync() {
        let mut goal = Goal::new("Laptop", 1_000.0, false);
        goal.push_contribution(250.0);
        goal.push_contribution(125.5);
        assert_eq!(goal.history(), &[250.0, 125.5]);
        assert_eq!(goal.contributed(), 375.5);
        assert_eq!(goal.remaining(), 624.5);
    }

    #[test]
    fn progress_clamps_and_guards_zero_target() {
        let mut goal = Goal::new("Trip", 100.0, false);
        goal.push_contribution(150.0);
        assert_eq!(goal.progress_percent(), 100.0);
        assert!(goal.is_complete());
        assert_eq!(goal.remaining(), 0.0);

        let zero = Goal::new("Broken", 0.0, false);
        assert_eq!(zero.progress_percent(), 0.0);
        assert!(!zero.is_complete());
    }

    #[test]
    fn loading_recomputes_contributed_from_history() {
        let json = r#"{"name":"Trip","target":"500.000","contributed":999,"history":[100000,"50.000"]}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.target, 500_000.0);
        assert_eq!(goal.contributed(), 150_000.0);
    }

    #[test]
    fn loading_without_history_seeds_it_from_contributed() {
        let json = r#"{"name":"Bonus","target":200,"contributed":80,"isBonus":true}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.history(), &[80.0]);
        assert_eq!(goal.contributed(), 80.0);
        assert!(goal.is_bonus);
    }
}
