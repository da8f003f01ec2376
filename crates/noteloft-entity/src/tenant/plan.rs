//! Tenant plan enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription plans available to tenants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tenant_plan", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TenantPlan {
    /// The default plan, limited to a fixed number of notes.
    Free,
    /// Paid plan with no note ceiling.
    Pro,
}

impl TenantPlan {
    /// Return the maximum number of notes allowed under this plan, or
    /// `None` when the plan is unlimited.
    pub fn note_limit(&self) -> Option<i64> {
        match self {
            Self::Free => Some(3),
            Self::Pro => None,
        }
    }

    /// Return the plan as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for TenantPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
