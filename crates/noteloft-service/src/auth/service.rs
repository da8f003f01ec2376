//! Email/password login issuing session tokens.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use noteloft_auth::jwt::TokenEncoder;
use noteloft_auth::password::PasswordHasher;
use noteloft_core::error::AppError;
use noteloft_database::repositories::UserRepository;
use noteloft_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The signed session token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// Handles the email/password login flow.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    encoder: Arc<TokenEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Authenticates a user and issues a session token.
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` error, so the response never reveals whether
    /// an account exists. Email matching is case-insensitive.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            return Err(AppError::invalid_credentials());
        }

        let (token, expires_at) = self.encoder.issue(user.id, user.tenant_id, user.role)?;

        info!(user_id = %user.id, tenant_id = %user.tenant_id, "User logged in");

        Ok(LoginOutcome {
            token,
            expires_at,
            user,
        })
    }
}
