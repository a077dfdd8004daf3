//! Local registration and login gate.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use rand_core::OsRng;
use uuid::Uuid;

use crate::core::errors::FinanceError;
use crate::ledger::{Session, UserDirectory, UserRecord};
use crate::storage::{load_json, save_json, KeyValueStore, StorageKey};

use super::{ServiceError, ServiceResult};

pub struct IdentityService;

impl IdentityService {
    pub fn directory(store: &dyn KeyValueStore) -> ServiceResult<UserDirectory> {
        Ok(load_json(store, StorageKey::Users)?.unwrap_or_default())
    }

    /// Registers a new user and persists the directory.
    pub fn register(
        store: &dyn KeyValueStore,
        username: &str,
        password: &str,
    ) -> ServiceResult<Session> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::Invalid(
                "Enter both a username and a password".into(),
            ));
        }
        let mut directory = Self::directory(store)?;
        if directory.contains_key(username) {
            tracing::warn!(username, "registration rejected: user exists");
            return Err(FinanceError::UserExists(username.to_string()).into());
        }
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            credential: hash_password(password)?,
            created_at: Utc::now(),
        };
        let session = Session::from(&record);
        directory.insert(username.to_string(), record);
        save_json(store, StorageKey::Users, &directory)?;
        tracing::info!(username, "user registered");
        Ok(session)
    }

    pub fn login(
        store: &dyn KeyValueStore,
        username: &str,
        password: &str,
    ) -> ServiceResult<Session> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::Invalid(
                "Enter your username and password".into(),
            ));
        }
        let directory = Self::directory(store)?;
        let record = directory
            .get(username)
            .ok_or_else(|| FinanceError::UserNotFound(username.to_string()))?;
        if !verify_password(password, &record.credential)? {
            tracing::warn!(username, "login rejected: wrong credential");
            return Err(FinanceError::WrongCredential.into());
        }
        tracing::info!(username, "user logged in");
        Ok(Session::from(record))
    }
}

fn hash_password(password: &str) -> Result<String, FinanceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| FinanceError::StorageError(format!("hash error: {err}")))
}

fn verify_password(password: &str, credential: &str) -> Result<bool, FinanceError> {
    let parsed = PasswordHash::new(credential)
        .map_err(|err| FinanceError::StorageError(format!("stored credential unreadable: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
