use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    amount::{lenient_amounts, RawAmount},
    goal::Goal,
    transaction::Transaction,
};

/// A derived value that is either still pending or has been computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Computation<T> {
    #[default]
    NotComputed,
    Computed(T),
}

impl<T> Computation<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Computation::NotComputed => None,
            Computation::Computed(value) => Some(value),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Computation::Computed(_))
    }
}

/// Fixed income and expense fields entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    Salary,
    OtherIncome,
    Rent,
    Utilities,
    Transport,
    Food,
    OtherExpenses,
}

impl BudgetField {
    pub const ALL: [BudgetField; 7] = [
        BudgetField::Salary,
        BudgetField::OtherIncome,
        BudgetField::Rent,
        BudgetField::Utilities,
        BudgetField::Transport,
        BudgetField::Food,
        BudgetField::OtherExpenses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetField::Salary => "salary",
            BudgetField::OtherIncome => "other-income",
            BudgetField::Rent => "rent",
            BudgetField::Utilities => "utilities",
            BudgetField::Transport => "transport",
            BudgetField::Food => "food",
            BudgetField::OtherExpenses => "other-expenses",
        }
    }
}

impl fmt::Display for BudgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        BudgetField::ALL
            .into_iter()
            .find(|field| field.label() == normalized)
            .ok_or_else(|| format!("unknown budget field `{}`", value))
    }
}

/// Raw user inputs that every derived figure is computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInputs {
    #[serde(default)]
    pub salary: RawAmount,
    #[serde(default)]
    pub other_income: RawAmount,
    #[serde(default)]
    pub rent: RawAmount,
    #[serde(default)]
    pub utilities: RawAmount,
    #[serde(default)]
    pub transport: RawAmount,
    #[serde(default)]
    pub food: RawAmount,
    #[serde(default)]
    pub other_expenses: RawAmount,
    #[serde(default, deserialize_with = "lenient_amounts")]
    pub extra_income_list: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_amounts")]
    pub extra_expense_list: Vec<f64>,
}

impl BudgetInputs {
    pub fn field(&self, field: BudgetField) -> &RawAmount {
        match field {
            BudgetField::Salary => &self.salary,
            BudgetField::OtherIncome => &self.other_income,
            BudgetField::Rent => &self.rent,
            BudgetField::Utilities => &self.utilities,
            BudgetField::Transport => &self.transport,
            BudgetField::Food => &self.food,
            BudgetField::OtherExpenses => &self.other_expenses,
        }
    }

    pub fn field_mut(&mut self, field: BudgetField) -> &mut RawAmount {
        match field {
            BudgetField::Salary => &mut self.salary,
            BudgetField::OtherIncome => &mut self.other_income,
            BudgetField::Rent => &mut self.rent,
            BudgetField::Utilities => &mut self.utilities,
            BudgetField::Transport => &mut self.transport,
            BudgetField::Food => &mut self.food,
            BudgetField::OtherExpenses => &mut self.other_expenses,
        }
    }

    pub fn value(&self, field: BudgetField) -> f64 {
        self.field(field).value()
    }
}

/// Aggregated figures derived from [`BudgetInputs`] and the goal ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_saved: f64,
    pub balance: f64,
}

/// The full persisted record for one user's budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    #[serde(flatten)]
    pub inputs: BudgetInputs,
    #[serde(default)]
    pub totals: Computation<Totals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<u32>,
    #[serde(default)]
    pub daily_allowance: Computation<f64>,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl BudgetSnapshot {
    pub fn balance(&self) -> Option<f64> {
        self.totals.as_option().map(|totals| totals.balance)
    }
}
