//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use noteloft_auth::jwt::{TokenDecoder, TokenEncoder};
use noteloft_auth::password::PasswordHasher;
use noteloft_core::config::AppConfig;
use noteloft_database::repositories::{NoteRepository, TenantRepository, UserRepository};
use noteloft_service::auth::AuthService;
use noteloft_service::note::NoteService;
use noteloft_service::tenant::TenantService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// immutable or internally pooled, so cloning per request is cheap and
/// requests share no mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token decoder used by the auth extractor.
    pub token_decoder: Arc<TokenDecoder>,
    /// Login flow.
    pub auth_service: Arc<AuthService>,
    /// Note CRUD with quota enforcement.
    pub note_service: Arc<NoteService>,
    /// Tenant upgrades.
    pub tenant_service: Arc<TenantService>,
}

impl AppState {
    /// Wires repositories and services over the given pool and config.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let tenant_repo = Arc::new(TenantRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let note_repo = Arc::new(NoteRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(user_repo, password_hasher, token_encoder));
        let note_service = Arc::new(NoteService::new(note_repo));
        let tenant_service = Arc::new(TenantService::new(tenant_repo));

        Self {
            config: Arc::new(config),
            db_pool,
            token_decoder,
            auth_service,
            note_service,
            tenant_service,
        }
    }
}
