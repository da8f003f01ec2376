//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A note owned by a tenant.
///
/// Notes belong to the tenant, not to an individual user: any user within
/// the tenant may read and write any of the tenant's notes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}
