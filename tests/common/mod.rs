#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use cash_run::{
    core::services::IdentityService, storage::JsonFileStore, FinanceWorkspace,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn open_store(base: &PathBuf) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(Some(base.clone())).expect("create json store"))
}

/// Registers `username` in a fresh directory and opens their workspace.
pub fn setup_workspace(username: &str) -> (FinanceWorkspace, Arc<JsonFileStore>, PathBuf) {
    let base = temp_base();
    let store = open_store(&base);
    let session =
        IdentityService::register(store.as_ref(), username, "secret").expect("register user");
    let workspace = FinanceWorkspace::open(store.clone(), session).expect("open workspace");
    (workspace, store, base)
}
