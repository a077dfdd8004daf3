//! Finance domain models and persistence-friendly types.

pub mod amount;
pub mod budget;
pub mod goal;
pub mod transaction;
pub mod user;

pub use amount::{parse_amount, RawAmount};
pub use budget::{BudgetField, BudgetInputs, BudgetSnapshot, Computation, Totals};
pub use goal::Goal;
pub use transaction::{Transaction, SAVINGS_CATEGORY};
pub use user::{Session, UserDirectory, UserRecord};
