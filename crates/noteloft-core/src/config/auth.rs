//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    ///
    /// Deliberately has no default: a missing secret fails configuration
    /// deserialization, so the server refuses to start rather than issue
    /// tokens nobody can verify.
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

fn default_token_ttl() -> u64 {
    60
}
