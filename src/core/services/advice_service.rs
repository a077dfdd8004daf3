//! Rule-based spending hints derived from the current totals.

use std::fmt;

use crate::ledger::{BudgetField, BudgetInputs, Totals};

const FOOD_SHARE_LIMIT: f64 = 30.0;
const TRANSPORT_SHARE_LIMIT: f64 = 15.0;
const UTILITIES_SHARE_LIMIT: f64 = 20.0;
const DISCRETIONARY_SHARE_LIMIT: f64 = 20.0;
const LOW_MARGIN_RATIO: f64 = 0.10;

/// A single hint emitted by the rule engine, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    FoodSpending,
    TransportSpending,
    UtilitiesSpending,
    DiscretionarySpending,
    LowMargin,
    Balanced,
}

impl Advice {
    pub fn message(self) -> &'static str {
        match self {
            Advice::FoodSpending => {
                "Food takes more than 30% of your income. Plan meals ahead and buy in bulk."
            }
            Advice::TransportSpending => {
                "Transport is above 15% of your income. Review routes, combine trips or use cheaper transport."
            }
            Advice::UtilitiesSpending => {
                "Utilities are high. Check energy and water use or compare providers."
            }
            Advice::DiscretionarySpending => {
                "\"Other\" expenses are large. Review them and drop non-essential purchases."
            }
            Advice::LowMargin => {
                "Your final balance is under 10% of your income. Prioritize cutting expenses or raising income."
            }
            Advice::Balanced => "Well done! Your expenses are balanced against your income.",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct AdviceService;

impl AdviceService {
    /// Evaluates every rule independently. When none fires, the result is
    /// exactly one [`Advice::Balanced`].
    pub fn evaluate(inputs: &BudgetInputs, totals: &Totals) -> Vec<Advice> {
        let share = |field: BudgetField| percent_of(inputs.value(field), totals.total_income);
        let mut hints = Vec::new();

        if share(BudgetField::Food) > FOOD_SHARE_LIMIT {
            hints.push(Advice::FoodSpending);
        }
        if share(BudgetField::Transport) > TRANSPORT_SHARE_LIMIT {
            hints.push(Advice::TransportSpending);
        }
        if share(BudgetField::Utilities) > UTILITIES_SHARE_LIMIT {
            hints.push(Advice::UtilitiesSpending);
        }
        if share(BudgetField::OtherExpenses) > DISCRETIONARY_SHARE_LIMIT {
            hints.push(Advice::DiscretionarySpending);
        }
        if totals.balance < totals.total_income * LOW_MARGIN_RATIO {
            hints.push(Advice::LowMargin);
        }
        if hints.is_empty() {
            hints.push(Advice::Balanced);
        }
        hints
    }

    pub fn messages(hints: &[Advice]) -> Vec<String> {
        hints.iter().map(ToString::to_string).collect()
    }
}

/// Share of `total` taken by `value`, as a percentage. Zero income yields 0.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value * 100.0 / total
    } else {
        0.0
    }
}
