//! Tenant plan upgrades.

use std::sync::Arc;

use tracing::info;

use noteloft_core::error::AppError;
use noteloft_database::repositories::TenantRepository;
use noteloft_entity::tenant::Tenant;

use crate::context::RequestContext;

/// Handles tenant plan upgrades.
#[derive(Debug, Clone)]
pub struct TenantService {
    /// Tenant repository.
    tenant_repo: Arc<TenantRepository>,
}

impl TenantService {
    /// Creates a new tenant service.
    pub fn new(tenant_repo: Arc<TenantRepository>) -> Self {
        Self { tenant_repo }
    }

    /// Upgrades the tenant identified by `slug` to the Pro plan.
    ///
    /// The role check runs before the slug lookup, so a non-admin learns
    /// nothing about which slugs exist. Admins may only upgrade their own
    /// tenant. Upgrading an already-Pro tenant succeeds as a no-op.
    pub async fn upgrade(&self, ctx: &RequestContext, slug: &str) -> Result<Tenant, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin role required"));
        }

        let tenant = self
            .tenant_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found"))?;

        if ctx.tenant_id != tenant.id {
            return Err(AppError::forbidden("You can only upgrade your own tenant"));
        }

        let upgraded = self
            .tenant_repo
            .upgrade_to_pro(tenant.id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found"))?;

        info!(tenant_id = %upgraded.id, slug = %upgraded.slug, "Tenant upgraded to Pro");

        Ok(upgraded)
    }
}
