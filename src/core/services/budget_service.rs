use crate::ledger::{BudgetField, BudgetInputs, BudgetSnapshot, Computation, Goal, Totals};

use super::{
    advice_service::AdviceService, allowance_service::AllowanceService, ServiceError,
    ServiceResult,
};

const INCOME_FIELDS: [BudgetField; 2] = [BudgetField::Salary, BudgetField::OtherIncome];
const EXPENSE_FIELDS: [BudgetField; 5] = [
    BudgetField::Rent,
    BudgetField::Utilities,
    BudgetField::Transport,
    BudgetField::Food,
    BudgetField::OtherExpenses,
];

pub struct BudgetService;

impl BudgetService {
    /// Pure reduction of inputs and goals into [`Totals`].
    pub fn totals(inputs: &BudgetInputs, goals: &[Goal]) -> Totals {
        let total_income = INCOME_FIELDS
            .iter()
            .map(|field| inputs.value(*field))
            .sum::<f64>()
            + inputs.extra_income_list.iter().sum::<f64>();
        let total_expenses = EXPENSE_FIELDS
            .iter()
            .map(|field| inputs.value(*field))
            .sum::<f64>()
            + inputs.extra_expense_list.iter().sum::<f64>();
        let total_saved = goals.iter().map(Goal::contributed).sum::<f64>();
        Totals {
            total_income,
            total_expenses,
            total_saved,
            balance: total_income - total_expenses - total_saved,
        }
    }

    /// Recomputes every derived field of the snapshot in one pass: totals,
    /// advice and (when days are set) the daily allowance.
    pub fn recompute(snapshot: &mut BudgetSnapshot) -> Totals {
        let totals = Self::totals(&snapshot.inputs, &snapshot.goals);
        let hints = AdviceService::evaluate(&snapshot.inputs, &totals);
        snapshot.advice = AdviceService::messages(&hints);
        snapshot.daily_allowance = match snapshot.days_remaining {
            Some(days) if days > 0 => {
                Computation::Computed(AllowanceService::daily_allowance(totals.balance, days))
            }
            _ => Computation::NotComputed,
        };
        snapshot.totals = Computation::Computed(totals);
        tracing::debug!(
            income = totals.total_income,
            expenses = totals.total_expenses,
            saved = totals.total_saved,
            balance = totals.balance,
            hints = hints.len(),
            "budget recomputed"
        );
        totals
    }

    pub fn set_field(inputs: &mut BudgetInputs, field: BudgetField, raw: &str) {
        *inputs.field_mut(field) = raw.trim().into();
    }

    /// Appends an ad-hoc income line. Blank input is rejected; anything else
    /// is parsed leniently.
    pub fn add_extra_income(inputs: &mut BudgetInputs, raw: &str) -> ServiceResult<f64> {
        let amount = Self::parse_line(raw)?;
        inputs.extra_income_list.push(amount);
        Ok(amount)
    }

    pub fn add_extra_expense(inputs: &mut BudgetInputs, raw: &str) -> ServiceResult<f64> {
        let amount = Self::parse_line(raw)?;
        inputs.extra_expense_list.push(amount);
        Ok(amount)
    }

    fn parse_line(raw: &str) -> ServiceResult<f64> {
        if raw.trim().is_empty() {
            return Err(ServiceError::Invalid("Amount cannot be empty".into()));
        }
        Ok(crate::ledger::parse_amount(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::RawAmount;

    fn sample_inputs() -> BudgetInputs {
        BudgetInputs {
            salary: RawAmount::new("3.000.000"),
            other_income: RawAmount::new("200,000"),
            rent: RawAmount::new("900000"),
            utilities: RawAmount::new("150.000"),
            transport: RawAmount::new("120000"),
            food: RawAmount::new("600.000"),
            other_expenses: RawAmount::new("not a number"),
            extra_income_list: vec![100_000.0],
            extra_expense_list: vec![30_000.0, 20_000.0],
        }
    }

    #[test]
    fn totals_sum_inputs_and_goal_contributions() {
        let mut goal = Goal::new("Trip", 1_000_000.0, false);
        goal.push_contribution(250_000.0);
        let totals = BudgetService::totals(&sample_inputs(), &[goal]);
        assert_eq!(totals.total_income, 3_300_000.0);
        assert_eq!(totals.total_expenses, 1_820_000.0);
        assert_eq!(totals.total_saved, 250_000.0);
        assert_eq!(totals.balance, 1_230_000.0);
    }

    #[test]
    fn recompute_fills_every_derived_field() {
        let mut snapshot = BudgetSnapshot {
            inputs: sample_inputs(),
            days_remaining: Some(10),
            ..BudgetSnapshot::default()
        };
        let totals = BudgetService::recompute(&mut snapshot);
        assert_eq!(snapshot.totals, Computation::Computed(totals));
        assert_eq!(
            snapshot.daily_allowance,
            Computation::Computed(totals.balance / 10.0)
        );
        assert!(!snapshot.advice.is_empty());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut snapshot = BudgetSnapshot {
            inputs: sample_inputs(),
            ..BudgetSnapshot::default()
        };
        BudgetService::recompute(&mut snapshot);
        let first = serde_json::to_string(&snapshot).unwrap();
        BudgetService::recompute(&mut snapshot);
        let second = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_extra_lines_are_rejected() {
        let mut inputs = BudgetInputs::default();
        assert!(BudgetService::add_extra_income(&mut inputs, "   ").is_err());
        assert_eq!(
            BudgetService::add_extra_expense(&mut inputs, "1.250").unwrap(),
            1250.0
        );
        assert_eq!(
            BudgetService::add_extra_income(&mut inputs, "abc").unwrap(),
            0.0
        );
        assert_eq!(inputs.extra_expense_list, vec![1250.0]);
        assert_eq!(inputs.extra_income_list, vec![0.0]);
    }
}
