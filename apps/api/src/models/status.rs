use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request body for POST /api/status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// A status ping logged by a client. Unrelated to suggestion data — it only
/// shares the record store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatusCheckRecord {
    pub id: Uuid,
    pub client_name: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheckRecord {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}
