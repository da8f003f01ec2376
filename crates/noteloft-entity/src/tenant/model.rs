//! Tenant entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::plan::TenantPlan;

/// An isolated customer organization owning users and notes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Unique human-readable key used in URLs.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Subscription plan. Transitions Free -> Pro only; never reverts.
    pub plan: TenantPlan,
}
