use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("User `{0}` is already registered")]
    UserExists(String),
    #[error("User `{0}` not found. Register first.")]
    UserNotFound(String),
    #[error("Wrong credential")]
    WrongCredential,
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Savings entry {0} is already assigned to a goal")]
    AlreadyAssigned(Uuid),
    #[error("Finances not computed yet. Run `compute` first.")]
    NotComputed,
}

pub type Result<T> = StdResult<T, FinanceError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}
