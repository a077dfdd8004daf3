//! Cash Run: a single-user personal-finance core.
//!
//! The crate tracks a monthly budget (income, expenses, ad-hoc lines), derives
//! totals, a daily spending allowance and rule-based advice, and keeps a
//! savings-goal ledger fed by contributions and pending savings entries. State
//! is persisted per user as JSON documents in a key-value store.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::errors::{FinanceError, Result};
pub use crate::core::services::{ServiceError, ServiceResult};
pub use crate::core::FinanceWorkspace;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log line.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "cash_run initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
