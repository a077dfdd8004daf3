pub mod advice_service;
pub mod allowance_service;
pub mod budget_service;
pub mod goal_service;
pub mod identity_service;
pub mod transaction_service;

pub use advice_service::{Advice, AdviceService};
pub use allowance_service::AllowanceService;
pub use budget_service::BudgetService;
pub use goal_service::{GoalDraft, GoalService};
pub use identity_service::IdentityService;
pub use transaction_service::TransactionService;

use crate::core::errors::FinanceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
