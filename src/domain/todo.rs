use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the `todos` table. Timestamps are assigned by the store on
/// insert; nothing is cached in memory between operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub todo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
