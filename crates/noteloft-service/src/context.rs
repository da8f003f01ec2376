//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use noteloft_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the verified session token by the API layer and passed
/// explicitly into service methods, so every operation knows *who* is
/// acting on behalf of *which* tenant without any cross-request state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The tenant every operation in this request is scoped to.
    pub tenant_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, tenant_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is a tenant admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
