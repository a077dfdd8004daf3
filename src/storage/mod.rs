pub mod json_backend;
pub mod memory;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::core::errors::FinanceError;

pub type Result<T> = std::result::Result<T, FinanceError>;

const USERS_KEY: &str = "usuarios_registrados";
const FINANCES_PREFIX: &str = "finanzas";
const SAVINGS_PREFIX: &str = "ahorros";

/// Abstraction over string key-value backends holding JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Structured record keys. Per-user records are namespaced by the user id so
/// no credential ever appears in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Users,
    Finances(Uuid),
    Savings(Uuid),
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKey::Users => f.write_str(USERS_KEY),
            StorageKey::Finances(user) => write!(f, "{}_{}", FINANCES_PREFIX, user.simple()),
            StorageKey::Savings(user) => write!(f, "{}_{}", SAVINGS_PREFIX, user.simple()),
        }
    }
}

/// Reads and decodes the document under `key`. Absent keys yield `None`;
/// undecodable documents are reported rather than replaced.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>> {
    let name = key.to_string();
    let Some(data) = store.get(&name)? else {
        return Ok(None);
    };
    serde_json::from_str(&data).map(Some).map_err(|err| {
        FinanceError::StorageError(format!("record `{}` is malformed: {}", name, err))
    })
}

/// Encodes `value` and writes it under `key`, replacing any previous value.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    store.set(&key.to_string(), &json)
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_with_legacy_prefixes() {
        let id = Uuid::nil();
        assert_eq!(StorageKey::Users.to_string(), "usuarios_registrados");
        assert_eq!(
            StorageKey::Finances(id).to_string(),
            "finanzas_00000000000000000000000000000000"
        );
        assert!(StorageKey::Savings(id).to_string().starts_with("ahorros_"));
    }

    #[test]
    fn malformed_documents_surface_an_error() {
        let store = MemoryStore::new();
        store.set("usuarios_registrados", "{not json").unwrap();
        let result: Result<Option<Vec<String>>> = load_json(&store, StorageKey::Users);
        let err = result.expect_err("corrupt record should fail");
        assert!(err.to_string().contains("usuarios_registrados"));
    }

    #[test]
    fn missing_documents_load_as_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<String>> = load_json(&store, StorageKey::Users).unwrap();
        assert!(loaded.is_none());
    }
}
