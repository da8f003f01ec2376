//! JWT claims carried by every session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use noteloft_entity::user::UserRole;

/// Claims payload embedded in every session token.
///
/// Signed, not encrypted: the holder can read these fields, but any
/// modification invalidates the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// The tenant the user belongs to.
    pub tid: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> Uuid {
        self.tid
    }
}
