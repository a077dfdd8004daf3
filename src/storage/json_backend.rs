use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, write_atomic, PathResolver};

use super::{KeyValueStore, Result};

const RECORD_EXTENSION: &str = "json";

/// File-backed store writing one JSON document per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
    store_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        ensure_dir(&app_root)?;
        let store_dir = PathResolver::store_dir_in(&app_root);
        ensure_dir(&store_dir)?;
        Ok(Self {
            root: app_root,
            store_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, key: &str) -> PathBuf {
        self.store_dir
            .join(format!("{}.{}", canonical_key(key), RECORD_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);
        write_atomic(&path, value)?;
        tracing::debug!(key, path = %path.display(), "record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.record_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "record".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::tmp_path;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn set_then_get_returns_document() {
        let (store, _guard) = store_with_temp_dir();
        store.set("finanzas_abc", "{\"salary\":\"10\"}").unwrap();
        let loaded = store.get("finanzas_abc").unwrap();
        assert_eq!(loaded.as_deref(), Some("{\"salary\":\"10\"}"));
        assert!(!tmp_path(&store.record_path("finanzas_abc")).exists());
    }

    #[test]
    fn missing_and_removed_keys_read_as_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.get("ahorros_x").unwrap().is_none());
        store.set("ahorros_x", "[]").unwrap();
        store.remove("ahorros_x").unwrap();
        store.remove("ahorros_x").unwrap();
        assert!(store.get("ahorros_x").unwrap().is_none());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let (store, _guard) = store_with_temp_dir();
        let path = store.record_path("../escape me");
        assert_eq!(path.parent(), Some(store.store_dir.as_path()));
        assert!(path.ends_with("___escape_me.json"));
    }
}
