use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered identity. The credential is an argon2 PHC string, never the
/// password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

/// Username to record map stored under the registry key.
pub type UserDirectory = BTreeMap<String, UserRecord>;

/// An authenticated user; the id namespaces that user's persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
}

impl From<&UserRecord> for Session {
    fn from(record: &UserRecord) -> Self {
        Self {
            user_id: record.id,
            username: record.username.clone(),
        }
    }
}
