//! Tenant repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use noteloft_core::error::{AppError, ErrorKind};
use noteloft_core::result::AppResult;
use noteloft_entity::tenant::Tenant;

/// Repository for tenant lookups and plan changes.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tenant by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tenant by slug", e)
            })
    }

    /// Set the tenant's plan to Pro and return the updated row.
    ///
    /// Idempotent: upgrading an already-Pro tenant is a no-op success.
    pub async fn upgrade_to_pro(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("UPDATE tenants SET plan = 'pro' WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upgrade tenant", e))
    }
}
